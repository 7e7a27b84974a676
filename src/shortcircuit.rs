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

// Author(s): Rafael Villar Burke <pachi@ietcc.csic.es>

/*! #Comprobación térmica de cortocircuito

Verificación adiabática de la sección frente a la corriente de cortocircuito
prevista: S ≥ I·√t / k, con la constante k propia del material y aislamiento.
Con conductores en paralelo cada conductor soporta la parte proporcional de
la corriente de defecto.

La comprobación es informativa y no condiciona la selección de sección.
*/

use serde::{Deserialize, Serialize};

use crate::rebt::k_factor;
use crate::types::CableInput;

/// Outcome of the short circuit withstand check
///
/// Resultado de la comprobación térmica de cortocircuito.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScVerdict {
    /// No fault data was supplied, so the check was not carried out
    NotEvaluated,
    /// The section withstands the fault; minimum admissible section [mm²]
    Pass {
        /// Minimum section that withstands the fault [mm²]
        min_section: f32,
    },
    /// The section does not withstand the fault; minimum admissible section [mm²]
    Fail {
        /// Minimum section that withstands the fault [mm²]
        min_section: f32,
    },
}

/// Short circuit withstand check for a given section
///
/// Comprobación térmica de la sección frente al cortocircuito definido en los
/// datos de entrada. Sin datos de defecto devuelve `NotEvaluated`.
pub fn check_short_circuit(input: &CableInput, section: f32) -> ScVerdict {
    let fault = match input.fault {
        Some(fault) => fault,
        None => return ScVerdict::NotEvaluated,
    };
    let k = k_factor(input.material, input.insulation);
    // isc en kA; la corriente se reparte entre los conductores en paralelo
    let i_fault = fault.isc * 1000.0 / input.parallel as f32;
    let min_section = i_fault * fault.t.sqrt() / k;
    if section >= min_section {
        ScVerdict::Pass { min_section }
    } else {
        ScVerdict::Fail { min_section }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FaultParams, Insulation, Material};

    #[test]
    fn tnot_evaluated() {
        let input = CableInput::new(150.0, 75.0);
        assert_eq!(check_short_circuit(&input, 50.0), ScVerdict::NotEvaluated);
    }

    #[test]
    fn tverdicts() {
        let mut input = CableInput::new(150.0, 75.0);
        input.fault = Some(FaultParams::new(10.0, 0.2));
        match check_short_circuit(&input, 50.0) {
            ScVerdict::Pass { min_section } => {
                assert!((min_section - 31.273678).abs() < 1e-4)
            }
            other => panic!("Pass esperado, obtenido {:?}", other),
        }
        match check_short_circuit(&input, 6.0) {
            ScVerdict::Fail { min_section } => {
                assert!((min_section - 31.273678).abs() < 1e-4)
            }
            other => panic!("Fail esperado, obtenido {:?}", other),
        }
    }

    #[test]
    fn tparalelo() {
        let mut input = CableInput::new(150.0, 75.0);
        input.fault = Some(FaultParams::new(10.0, 0.2));
        input.parallel = 2;
        match check_short_circuit(&input, 16.0) {
            ScVerdict::Pass { min_section } => {
                assert!((min_section - 15.636839).abs() < 1e-4)
            }
            other => panic!("Pass esperado, obtenido {:?}", other),
        }
    }

    #[test]
    fn taluminio_pvc() {
        let mut input = CableInput::new(30.0, 25.0);
        input.material = Material::ALUMINIO;
        input.insulation = Insulation::PVC;
        input.fault = Some(FaultParams::new(6.0, 0.5));
        match check_short_circuit(&input, 10.0) {
            ScVerdict::Fail { min_section } => {
                assert!((min_section - 55.824219).abs() < 1e-3)
            }
            other => panic!("Fail esperado, obtenido {:?}", other),
        }
    }
}
