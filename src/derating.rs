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

/*! #Factores de corrección de la intensidad admisible

Composición del factor global de corrección que afecta a la intensidad
admisible de referencia: temperatura (Kt), agrupamiento (Kg), resistividad
del terreno (Ks) y, en instalaciones enterradas (método D), profundidad de
enterramiento.
*/

use crate::rebt::burial_factor;
use crate::types::CableInput;

/// Combined derating factor for the installation conditions
///
/// Factor global de corrección de la intensidad admisible. Es el producto de
/// los factores de temperatura, agrupamiento y resistividad del terreno y, en
/// el método D, del factor por profundidad de enterramiento.
pub fn combined_factor(input: &CableInput) -> f32 {
    let burial = match (input.method.is_buried(), input.burial_depth) {
        (true, Some(depth)) => burial_factor(depth),
        _ => 1.0,
    };
    input.k_temp * input.k_group * input.k_soil * burial
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BurialDepth, InstallMethod, Insulation, Material};

    #[test]
    fn treference_conditions() {
        let input = CableInput::new(50.0, 30.0);
        assert_eq!(combined_factor(&input), 1.0);
    }

    #[test]
    fn tcombination() {
        let mut input = CableInput::new(50.0, 30.0);
        input.k_temp = 0.91;
        input.k_group = 0.8;
        assert!((combined_factor(&input) - 0.728).abs() < 1e-6);
    }

    #[test]
    fn tburied() {
        let mut input = CableInput::new(40.0, 60.0);
        input.material = Material::COBRE;
        input.insulation = Insulation::PVC;
        input.method = InstallMethod::D;
        input.burial_depth = Some(BurialDepth::P070);
        input.k_group = 0.8;
        input.k_soil = 0.9;
        assert!((combined_factor(&input) - 0.6984).abs() < 1e-6);
    }

    #[test]
    fn tdepth_ignored_when_not_buried() {
        let mut input = CableInput::new(40.0, 60.0);
        input.method = InstallMethod::E;
        input.burial_depth = Some(BurialDepth::P100);
        assert_eq!(combined_factor(&input), 1.0);
    }
}
