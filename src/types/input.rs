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

use serde::{Deserialize, Serialize};

use crate::error::{CableError, Result};
use crate::types::basic::{BurialDepth, InstallMethod, Insulation, Material, PhaseSystem};

// -------------------- FaultParams

/// Datos del cortocircuito previsto en el punto de instalación
///
/// Short circuit case used to verify the thermal withstand of the selected section.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaultParams {
    /// Prospective short circuit current Isc [kA]
    pub isc: f32,
    /// Fault clearing time t [s]
    pub t: f32,
}

impl FaultParams {
    /// Constructor
    pub fn new(isc: f32, t: f32) -> Self {
        Self { isc, t }
    }
}

// -------------------- CableInput

/// Datos de entrada para el dimensionado de una línea
///
/// Valores de proyecto de la línea (intensidad, longitud, configuración) y
/// factores de corrección aplicables. Es el único dato del cálculo: el resto
/// de magnitudes se derivan de él y de las tablas reglamentarias.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CableInput {
    /// Design current Ib [A]
    pub ib: f32,
    /// Cable run length [m]
    pub length: f32,
    /// Conductor material
    pub material: Material,
    /// Cable insulation
    pub insulation: Insulation,
    /// Installation reference method
    pub method: InstallMethod,
    /// Phase system (three-phase 400 V or single-phase 230 V)
    pub phase: PhaseSystem,
    /// Power factor cos φ (0, 1]
    pub cos_phi: f32,
    /// Ambient temperature correction factor Kt
    pub k_temp: f32,
    /// Grouping correction factor Kg
    pub k_group: f32,
    /// Soil thermal resistivity correction factor Ks
    pub k_soil: f32,
    /// Burial depth (only for method D)
    pub burial_depth: Option<BurialDepth>,
    /// Number of parallel cables per phase (1-4)
    pub parallel: u32,
    /// Short circuit case (absent -> withstand check not evaluated)
    pub fault: Option<FaultParams>,
    /// Cable cost per meter and run (absent -> no cost estimate)
    pub unit_cost: Option<f32>,
    /// External earth fault loop impedance Ze [Ω] (absent -> typical 0.35 Ω)
    pub ze: Option<f32>,
    /// Protective conductor section [mm²] (absent -> same as phase section)
    pub pe_section: Option<f32>,
}

impl CableInput {
    /// Línea con los valores de proyecto habituales
    ///
    /// Build an input record from the design current and length, with the usual
    /// project defaults for everything else (Cu, XLPE, method C, three-phase,
    /// cos φ 0.85, unit correction factors, single run).
    pub fn new(ib: f32, length: f32) -> Self {
        Self {
            ib,
            length,
            material: Material::COBRE,
            insulation: Insulation::XLPE,
            method: InstallMethod::C,
            phase: PhaseSystem::TRIFASICO,
            cos_phi: 0.85,
            k_temp: 1.0,
            k_group: 1.0,
            k_soil: 1.0,
            burial_depth: None,
            parallel: 1,
            fault: None,
            unit_cost: None,
            ze: None,
            pe_section: None,
        }
    }

    /// Seno del ángulo del factor de potencia, sin φ
    pub fn sin_phi(&self) -> f32 {
        (1.0 - self.cos_phi * self.cos_phi).sqrt()
    }

    /// Comprueba la validez de los datos de entrada
    ///
    /// # Errors
    ///
    /// * Intensidad, longitud o factor de potencia fuera de rango
    /// * Factores de corrección fuera del rango tabulado (0, 1.25]
    /// * Profundidad de soterramiento inconsistente con el método de instalación
    /// * Número de cables en paralelo fuera de 1-4
    /// * Datos de cortocircuito, coste o impedancia externa no positivos
    pub fn validate(&self) -> Result<()> {
        if self.ib <= 0.0 {
            return Err(CableError::WrongInput(format!(
                "La intensidad de cálculo debe ser positiva y es {:.2} A",
                self.ib
            )));
        }
        if self.length <= 0.0 {
            return Err(CableError::WrongInput(format!(
                "La longitud de la línea debe ser positiva y es {:.2} m",
                self.length
            )));
        }
        if self.cos_phi <= 0.0 || self.cos_phi > 1.0 {
            return Err(CableError::WrongInput(format!(
                "El factor de potencia debe estar entre 0 y 1 y es {:.2}",
                self.cos_phi
            )));
        }
        // Las tablas de la norma contienen factores mayores que la unidad
        // para condiciones favorables, con 1.25 como cota superior
        for &(name, k) in &[
            ("Kt", self.k_temp),
            ("Kg", self.k_group),
            ("Ks", self.k_soil),
        ] {
            if k <= 0.0 || k > 1.25 {
                return Err(CableError::WrongInput(format!(
                    "El factor de corrección {} debe estar entre 0 y 1.25 y es {:.2}",
                    name, k
                )));
            }
        }
        if self.method.is_buried() && self.burial_depth.is_none() {
            return Err(CableError::WrongInput(
                "El método D (enterrado) requiere indicar la profundidad de soterramiento".into(),
            ));
        }
        if !self.method.is_buried() && self.burial_depth.is_some() {
            return Err(CableError::WrongInput(format!(
                "La profundidad de soterramiento solo es aplicable al método D y el método es {}",
                self.method
            )));
        }
        if self.parallel < 1 || self.parallel > 4 {
            return Err(CableError::WrongInput(format!(
                "El número de cables en paralelo debe estar entre 1 y 4 y es {}",
                self.parallel
            )));
        }
        if let Some(fault) = &self.fault {
            if fault.isc <= 0.0 {
                return Err(CableError::WrongInput(format!(
                    "La corriente de cortocircuito debe ser positiva y es {:.2} kA",
                    fault.isc
                )));
            }
            if fault.t <= 0.0 {
                return Err(CableError::WrongInput(format!(
                    "El tiempo de despeje de la falta debe ser positivo y es {:.2} s",
                    fault.t
                )));
            }
        }
        if let Some(cost) = self.unit_cost {
            if cost < 0.0 {
                return Err(CableError::WrongInput(format!(
                    "El coste unitario del cable no puede ser negativo y es {:.2}",
                    cost
                )));
            }
        }
        if let Some(ze) = self.ze {
            if ze < 0.0 {
                return Err(CableError::WrongInput(format!(
                    "La impedancia externa del bucle de defecto no puede ser negativa y es {:.2} Ω",
                    ze
                )));
            }
        }
        Ok(())
    }
}
