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

/*! #Caída de tensión en la línea

Cálculo de la caída de tensión en régimen permanente con el modelo de
impedancia de línea (R·cosφ + X·senφ), para sistemas trifásicos (factor √3
sobre la tensión compuesta) y monofásicos (factor 2, ida y vuelta). Con
conductores en paralelo la impedancia efectiva se divide entre el número
de conductores por fase.
*/

use crate::rebt::LineParams;
use crate::types::{CableInput, PhaseSystem};

/// Voltage drop along the line, in absolute and relative terms
///
/// Caída de tensión en la línea, en valor absoluto y porcentual.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct VoltageDrop {
    /// Voltage drop [V]
    pub volts: f32,
    /// Voltage drop relative to the nominal voltage [%]
    pub percent: f32,
}

/// Voltage drop for a conductor under the given service conditions
///
/// Caída de tensión del conductor con los parámetros de servicio de la línea.
pub fn voltage_drop(input: &CableInput, line: LineParams) -> VoltageDrop {
    let n = input.parallel as f32;
    let factor = match input.phase {
        PhaseSystem::TRIFASICO => 3.0_f32.sqrt(),
        PhaseSystem::MONOFASICO => 2.0,
    };
    let volts = factor
        * input.ib
        * ((line.r / n) * input.cos_phi + (line.x / n) * input.sin_phi())
        * input.length
        / 1000.0;
    let percent = volts / input.phase.voltage() * 100.0;
    VoltageDrop { volts, percent }
}
