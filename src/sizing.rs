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

/*! #Dimensionado de la sección de la línea

Selección de la sección mínima de la serie normalizada que satisface a la vez
el criterio de intensidad admisible (Ib ≤ Iz corregida) y el de caída de
tensión, recorriendo las secciones en orden creciente. Sobre la sección
seleccionada se calculan, con carácter informativo, la comprobación de
cortocircuito, el calibre de la protección, la impedancia del bucle de
defecto y el coste estimado del cable.
*/

use serde::{Deserialize, Serialize};

use crate::derating::combined_factor;
use crate::error::{CableError, Result};
use crate::protection::{breaker_rating, earth_loop};
use crate::rebt::{base_ampacity, conductor_params, section_index, SECTIONS, ZE_DEFAULT};
use crate::shortcircuit::{check_short_circuit, ScVerdict};
use crate::types::CableInput;
use crate::vdrop::voltage_drop;

/// Checks of one candidate section against the sizing criteria
///
/// Comprobaciones de una sección candidata frente a los criterios de
/// dimensionado.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeCase {
    /// Candidate section [mm²]
    pub section: f32,
    /// Reference ampacity [A]
    pub iz_base: f32,
    /// Corrected ampacity, including parallel conductors [A]
    pub iz_eff: f32,
    /// Ampacity criterion (Ib ≤ Iz)
    pub ampacity_ok: bool,
    /// Voltage drop [V]
    pub vdrop_volts: f32,
    /// Voltage drop [%]
    pub vdrop_pct: f32,
    /// Voltage drop criterion (within the limit)
    pub vdrop_ok: bool,
    /// Short circuit withstand check
    pub sc: ScVerdict,
}

/// Sizing of the line: selected section and its verifications
///
/// Dimensionado de la línea: sección seleccionada y sus comprobaciones,
/// junto con los datos de partida del cálculo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sizing {
    /// Input data of the computation
    pub input: CableInput,
    /// Voltage drop limit used in the selection [%]
    pub vdrop_limit: f32,
    /// Combined derating factor
    pub k_total: f32,
    /// Selected section [mm²]
    pub section: f32,
    /// Reference ampacity of the selected section [A]
    pub iz_base: f32,
    /// Corrected ampacity, including parallel conductors [A]
    pub iz_eff: f32,
    /// Voltage drop of the selected section [V]
    pub vdrop_volts: f32,
    /// Voltage drop of the selected section [%]
    pub vdrop_pct: f32,
    /// Short circuit withstand check
    pub sc: ScVerdict,
    /// Standard breaker rating protecting the line [A], if any fits
    pub breaker: Option<u32>,
    /// Earth fault loop impedance Zs [Ω]
    pub zs: f32,
    /// Cable cost estimate, when a unit cost was supplied [€]
    pub cost: Option<f32>,
}

/// Cable cost for a line [€]
///
/// Coste del cable de la línea a partir del coste unitario [€/m], contando
/// los conductores en paralelo.
pub fn cost_estimate(unit_cost: f32, length: f32, parallel: u32) -> f32 {
    unit_cost * length * parallel as f32
}

// Validez de los datos de partida comunes a estudio y dimensionado.
fn check_inputs(input: &CableInput, vdrop_limit: f32) -> Result<()> {
    input.validate()?;
    if vdrop_limit <= 0.0 {
        return Err(CableError::WrongInput(format!(
            "el límite de caída de tensión debe ser positivo y es {:.2}",
            vdrop_limit
        )));
    }
    if let Some(pe) = input.pe_section {
        if section_index(pe).is_none() {
            return Err(CableError::WrongInput(format!(
                "la sección del conductor de protección no es normalizada: {} mm2",
                pe
            )));
        }
    }
    Ok(())
}

/// Assess every normalized section against the sizing criteria
///
/// Estudio de todas las secciones de la serie normalizada frente a los
/// criterios de intensidad admisible y caída de tensión, en orden creciente
/// de sección. Las secciones sin entrada en las tablas aplicables se omiten.
///
/// # Errores
///
/// Devuelve un error con datos de entrada inválidos o un límite de caída de
/// tensión no positivo.
pub fn assess_sizes(input: &CableInput, vdrop_limit: f32) -> Result<Vec<SizeCase>> {
    check_inputs(input, vdrop_limit)?;
    let k_total = combined_factor(input);
    let mut cases = Vec::new();
    for &section in SECTIONS.iter() {
        let iz_base = match base_ampacity(input.material, input.insulation, input.method, section)
        {
            Ok(value) => value,
            Err(_) => continue,
        };
        let line = match conductor_params(input.material, input.insulation, section) {
            Ok(value) => value,
            Err(_) => continue,
        };
        let iz_eff = iz_base * k_total * input.parallel as f32;
        let vd = voltage_drop(input, line);
        cases.push(SizeCase {
            section,
            iz_base,
            iz_eff,
            ampacity_ok: iz_eff >= input.ib,
            vdrop_volts: vd.volts,
            vdrop_pct: vd.percent,
            vdrop_ok: vd.percent <= vdrop_limit,
            sc: check_short_circuit(input, section),
        });
    }
    Ok(cases)
}

/// Size the line: select the minimum section satisfying all criteria
///
/// Dimensionado de la línea: selecciona la menor sección de la serie
/// normalizada que cumple simultáneamente los criterios de intensidad
/// admisible y de caída de tensión, y completa el resultado con la
/// comprobación de cortocircuito, el calibre de la protección, la impedancia
/// del bucle de defecto a tierra y el coste estimado.
///
/// La comprobación de cortocircuito es informativa y no altera la sección
/// seleccionada.
///
/// # Errores
///
/// Devuelve un error con datos de entrada inválidos, con un límite de caída
/// de tensión no positivo o cuando ninguna sección de la serie cumple los
/// criterios de selección.
pub fn cable_sizing(input: &CableInput, vdrop_limit: f32) -> Result<Sizing> {
    let cases = assess_sizes(input, vdrop_limit)?;
    let case = cases
        .iter()
        .find(|case| case.ampacity_ok && case.vdrop_ok)
        .ok_or_else(|| {
            CableError::NoSolution(format!(
                "ninguna sección normalizada cumple intensidad admisible y caída de tensión para Ib = {:.2} A",
                input.ib
            ))
        })?;

    let line = conductor_params(input.material, input.insulation, case.section)?;
    let r_pe = match input.pe_section {
        Some(pe) => conductor_params(input.material, input.insulation, pe)?.r,
        None => line.r,
    };
    let ze = input.ze.unwrap_or(ZE_DEFAULT);
    let zs = earth_loop(ze, line.r, r_pe, input.length, input.parallel);
    let cost = input
        .unit_cost
        .map(|unit| cost_estimate(unit, input.length, input.parallel));

    Ok(Sizing {
        input: input.clone(),
        vdrop_limit,
        k_total: combined_factor(input),
        section: case.section,
        iz_base: case.iz_base,
        iz_eff: case.iz_eff,
        vdrop_volts: case.vdrop_volts,
        vdrop_pct: case.vdrop_pct,
        sc: case.sc,
        breaker: breaker_rating(input.ib, case.iz_eff),
        zs,
        cost,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rebt::VDROP_LIMIT_DEFAULT;
    use crate::types::InstallMethod;

    #[test]
    fn tseleccion() {
        let mut input = CableInput::new(50.0, 30.0);
        input.method = InstallMethod::E;
        input.cos_phi = 0.9;
        let sizing = cable_sizing(&input, VDROP_LIMIT_DEFAULT).unwrap();
        assert_eq!(sizing.section, 6.0);
        assert_eq!(sizing.iz_base, 51.0);
        assert_eq!(sizing.iz_eff, 51.0);
        assert_eq!(sizing.breaker, Some(50));
        assert_eq!(sizing.sc, ScVerdict::NotEvaluated);
        assert_eq!(sizing.cost, None);
        assert!((sizing.zs - 0.5714).abs() < 1e-4);
    }

    #[test]
    fn testudio() {
        let mut input = CableInput::new(50.0, 30.0);
        input.method = InstallMethod::E;
        let cases = assess_sizes(&input, VDROP_LIMIT_DEFAULT).unwrap();
        assert_eq!(cases.len(), SECTIONS.len());
        assert!(!cases[2].ampacity_ok); // 4 mm2, 40 A
        assert!(cases[3].ampacity_ok); // 6 mm2, 51 A
    }

    #[test]
    fn tsin_solucion() {
        let input = CableInput::new(5000.0, 30.0);
        match cable_sizing(&input, VDROP_LIMIT_DEFAULT) {
            Err(CableError::NoSolution(_)) => (),
            other => panic!("NoSolution esperado, obtenido {:?}", other),
        }
    }

    #[test]
    fn tlimite_invalido() {
        let input = CableInput::new(50.0, 30.0);
        assert!(cable_sizing(&input, 0.0).is_err());
    }

    #[test]
    fn tpe_no_normalizada() {
        let mut input = CableInput::new(50.0, 30.0);
        input.pe_section = Some(7.5);
        match cable_sizing(&input, VDROP_LIMIT_DEFAULT) {
            Err(CableError::WrongInput(_)) => (),
            other => panic!("WrongInput esperado, obtenido {:?}", other),
        }
    }

    #[test]
    fn tcoste() {
        assert_eq!(cost_estimate(1.5, 30.0, 1), 45.0);
        assert_eq!(cost_estimate(1.5, 30.0, 2), 90.0);
    }
}
