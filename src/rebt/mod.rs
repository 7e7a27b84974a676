// Copyright (c) 2018-2022  Ministerio de Fomento
//                          Instituto de Ciencias de la Construcción Eduardo Torroja (IETcc-CSIC)

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

// Author(s): Rafael Villar Burke <pachi@ietcc.csic.es>,
//            Daniel Jiménez González <dani@ietcc.csic.es>,
//            Marta Sorribes Gil <msorribes@ietcc.csic.es>

/*! #Datos reglamentarios y consultas sobre las tablas (REBT / UNE-HD 60364-5-52)

Acceso a las tablas normalizadas de la norma UNE-HD 60364-5-52: localización de
secciones en la serie normalizada, intensidades admisibles de referencia,
parámetros eléctricos de los conductores (R, X), constantes k de cortocircuito,
factores de corrección por profundidad de enterramiento y costes orientativos.

Las consultas por sección devuelven `CableError::SectionUnknown` cuando el valor
no pertenece a la serie normalizada de [`SECTIONS`](data/constant.SECTIONS.html).
*/

mod data;

pub use data::*;

use serde::{Deserialize, Serialize};

use crate::error::{CableError, Result};
use crate::types::{BurialDepth, InstallMethod, Insulation, Material};

/// Electrical parameters of a conductor, per unit length
///
/// Parámetros eléctricos del conductor por unidad de longitud.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineParams {
    /// AC resistance at service temperature [Ω/km]
    pub r: f32,
    /// Reactance [Ω/km]
    pub x: f32,
}

/// Locate a section in the normalized series
///
/// Posición de la sección en la serie normalizada, si pertenece a ella.
/// Los valores del catálogo son exactos en coma flotante.
pub fn section_index(section: f32) -> Option<usize> {
    SECTIONS.iter().position(|&s| s == section)
}

/// Reference ampacity for a conductor [A]
///
/// Intensidad admisible de referencia [A] para la sección, material,
/// aislamiento y método de instalación indicados, sin factores de corrección.
pub fn base_ampacity(
    material: Material,
    insulation: Insulation,
    method: InstallMethod,
    section: f32,
) -> Result<f32> {
    use InstallMethod::*;
    use Insulation::*;
    use Material::*;

    let idx = section_index(section)
        .ok_or_else(|| CableError::SectionUnknown(format!("{} mm2", section)))?;
    let table = match (insulation, material, method) {
        (XLPE, COBRE, C) => AMPACITY_XLPE_CU_C,
        (XLPE, COBRE, D) => AMPACITY_XLPE_CU_D,
        (XLPE, COBRE, E) | (XLPE, COBRE, F) => AMPACITY_XLPE_CU_EF,
        (XLPE, ALUMINIO, C) => AMPACITY_XLPE_AL_C,
        (XLPE, ALUMINIO, D) => AMPACITY_XLPE_AL_D,
        (XLPE, ALUMINIO, E) | (XLPE, ALUMINIO, F) => AMPACITY_XLPE_AL_EF,
        (PVC, COBRE, C) => AMPACITY_PVC_CU_C,
        (PVC, COBRE, D) => AMPACITY_PVC_CU_D,
        (PVC, COBRE, E) | (PVC, COBRE, F) => AMPACITY_PVC_CU_EF,
        (PVC, ALUMINIO, C) => AMPACITY_PVC_AL_C,
        (PVC, ALUMINIO, D) => AMPACITY_PVC_AL_D,
        (PVC, ALUMINIO, E) | (PVC, ALUMINIO, F) => AMPACITY_PVC_AL_EF,
    };
    Ok(f32::from(table[idx]))
}

/// Conductor electrical parameters (R, X) [Ω/km]
///
/// Resistencia en alterna a la temperatura de servicio del aislamiento y
/// reactancia del conductor, por unidad de longitud.
pub fn conductor_params(
    material: Material,
    insulation: Insulation,
    section: f32,
) -> Result<LineParams> {
    use Insulation::*;
    use Material::*;

    let idx = section_index(section)
        .ok_or_else(|| CableError::SectionUnknown(format!("{} mm2", section)))?;
    let r = match (insulation, material) {
        (XLPE, COBRE) => RESISTANCE_XLPE_CU[idx],
        (XLPE, ALUMINIO) => RESISTANCE_XLPE_AL[idx],
        (PVC, COBRE) => RESISTANCE_PVC_CU[idx],
        (PVC, ALUMINIO) => RESISTANCE_PVC_AL[idx],
    };
    let x = match material {
        COBRE => REACTANCE_CU[idx],
        ALUMINIO => REACTANCE_AL[idx],
    };
    Ok(LineParams { r, x })
}

/// Short circuit constant k [A·s½/mm²]
///
/// Constante k de la comprobación térmica de cortocircuito, según material
/// y aislamiento (S ≥ I·√t / k).
pub fn k_factor(material: Material, insulation: Insulation) -> f32 {
    use Insulation::*;
    use Material::*;

    match (insulation, material) {
        (XLPE, COBRE) => 143.0,
        (XLPE, ALUMINIO) => 94.0,
        (PVC, COBRE) => 115.0,
        (PVC, ALUMINIO) => 76.0,
    }
}

/// Correction factor for burial depth (method D)
///
/// Factor de corrección por profundidad de enterramiento, solo aplicable
/// al método D.
pub fn burial_factor(depth: BurialDepth) -> f32 {
    use BurialDepth::*;

    match depth {
        P050 => 1.00,
        P070 => 0.97,
        P100 => 0.93,
    }
}

/// Reference cable cost per meter [€/m]
///
/// Coste orientativo del cable por metro según material y sección.
pub fn unit_cost(material: Material, section: f32) -> Option<f32> {
    use Material::*;

    let idx = section_index(section)?;
    match material {
        COBRE => Some(COST_CU[idx]),
        ALUMINIO => Some(COST_AL[idx]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tsections() {
        assert_eq!(section_index(1.5), Some(0));
        assert_eq!(section_index(50.0), Some(8));
        assert_eq!(section_index(300.0), Some(15));
        assert_eq!(section_index(7.5), None);
    }

    #[test]
    fn tampacity() {
        assert_eq!(
            base_ampacity(Material::COBRE, Insulation::XLPE, InstallMethod::E, 50.0).unwrap(),
            180.0
        );
        // E y F comparten tabla
        assert_eq!(
            base_ampacity(Material::COBRE, Insulation::XLPE, InstallMethod::F, 50.0).unwrap(),
            180.0
        );
        assert_eq!(
            base_ampacity(Material::ALUMINIO, Insulation::PVC, InstallMethod::D, 10.0).unwrap(),
            40.0
        );
        assert!(
            base_ampacity(Material::COBRE, Insulation::XLPE, InstallMethod::C, 7.5).is_err()
        );
    }

    #[test]
    fn tconductor_params() {
        let p = conductor_params(Material::COBRE, Insulation::XLPE, 50.0).unwrap();
        assert_eq!(p.r, 0.463);
        assert_eq!(p.x, 0.080);
        let p = conductor_params(Material::ALUMINIO, Insulation::PVC, 1.5).unwrap();
        assert_eq!(p.r, 22.5);
        assert_eq!(p.x, 0.118);
    }

    #[test]
    fn tconstants() {
        assert_eq!(k_factor(Material::COBRE, Insulation::XLPE), 143.0);
        assert_eq!(k_factor(Material::ALUMINIO, Insulation::PVC), 76.0);
        assert_eq!(burial_factor(BurialDepth::P070), 0.97);
        assert_eq!(unit_cost(Material::COBRE, 6.0), Some(1.50));
        assert_eq!(unit_cost(Material::ALUMINIO, 7.5), None);
    }
}
