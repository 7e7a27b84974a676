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

/*! #Protecciones y bucle de defecto a tierra

Selección del calibre normalizado de interruptor automático que protege la
línea (Ib ≤ In ≤ Iz) e impedancia del bucle de defecto a tierra Zs para la
comprobación de la protección contra contactos indirectos.
*/

use crate::rebt::MCB_RATINGS;

/// Smallest standard breaker rating protecting the line [A]
///
/// Menor calibre normalizado de interruptor automático que cumple
/// Ib ≤ In ≤ Iz. Si ningún calibre de la serie cumple, no hay protección
/// normalizada adecuada.
pub fn breaker_rating(ib: f32, iz_eff: f32) -> Option<u32> {
    MCB_RATINGS
        .iter()
        .find(|&&rating| rating as f32 >= ib && rating as f32 <= iz_eff)
        .copied()
}

/// Earth fault loop impedance Zs [Ω]
///
/// Impedancia del bucle de defecto a tierra: impedancia externa Ze más la
/// resistencia de ida (fase, r1) y vuelta (protección, r2) de la línea. Con
/// conductores en paralelo la resistencia del tramo se divide entre ellos.
pub fn earth_loop(ze: f32, r1: f32, r2: f32, length: f32, parallel: u32) -> f32 {
    ze + (r1 + r2) * (length / 1000.0) / parallel as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tbreaker() {
        assert_eq!(breaker_rating(5.0, 6.0), Some(6));
        assert_eq!(breaker_rating(50.0, 51.0), Some(50));
        assert_eq!(breaker_rating(50.0, 62.0), Some(50));
        assert_eq!(breaker_rating(150.0, 180.0), Some(160));
    }

    #[test]
    fn tbreaker_sin_calibre() {
        // ningún calibre entre Ib e Iz
        assert_eq!(breaker_rating(52.0, 62.0), None);
        // por encima de la serie normalizada
        assert_eq!(breaker_rating(700.0, 800.0), None);
    }

    #[test]
    fn tearth_loop() {
        assert!((earth_loop(0.35, 3.69, 3.69, 30.0, 1) - 0.5714).abs() < 1e-4);
        assert!((earth_loop(0.35, 3.31, 3.31, 25.0, 1) - 0.5155).abs() < 1e-4);
    }

    #[test]
    fn tearth_loop_paralelo() {
        assert!((earth_loop(0.35, 0.463, 0.463, 100.0, 2) - 0.3963).abs() < 1e-4);
    }
}
