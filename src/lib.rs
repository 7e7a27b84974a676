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

/*!
RebtCable
=========

This crate provides a library and binary that **size low voltage electrical lines**
using the ampacity and voltage drop tables of the UNE-HD 60364-5-52 standard
(*Low-voltage electrical installations - Part 5-52: Selection and erection of
electrical equipment - Wiring systems*), as adopted by the spanish low voltage
code (REBT).

For a given design current and line length it selects the minimum normalized
conductor section that satisfies both the ampacity criterion, with correction
factors for temperature, grouping, soil resistivity and burial depth, and the
voltage drop criterion. The result is completed with the short circuit withstand
check, the standard breaker rating protecting the line, the earth fault loop
impedance and a cable cost estimate.

It also holds the following assumptions:

- reference ampacities and conductor resistances are taken at the service temperature of the insulation
- grouping and ambient conditions enter the computation through user supplied correction factors
- the short circuit withstand check is informative and does not condition the selected section
- the protective conductor shares material and insulation with the phase conductors

Some restrictions may be lifted in the future. Specifically:

- sizing of the neutral conductor under harmonic loads
- interpolation of correction factors for other burial depths

Este *crate* proporciona una biblioteca y un programa que **dimensionan líneas
eléctricas de baja tensión** con las tablas de intensidad admisible y caída de
tensión de la norma UNE-HD 60364-5-52, tal como las adopta el Reglamento
Electrotécnico para Baja Tensión (REBT).

Para una intensidad de cálculo y una longitud de línea dadas selecciona la menor
sección normalizada de conductor que cumple a la vez el criterio de intensidad
admisible, con factores de corrección por temperatura, agrupamiento,
resistividad del terreno y profundidad de enterramiento, y el criterio de caída
de tensión. El resultado se completa con la comprobación térmica de
cortocircuito, el calibre normalizado de la protección, la impedancia del bucle
de defecto a tierra y una estimación del coste del cable.

También realiza los siguientes supuestos:

- las intensidades admisibles y resistencias de referencia corresponden a la temperatura de servicio del aislamiento
- el agrupamiento y las condiciones ambientales se introducen mediante factores de corrección aportados por el usuario
- la comprobación de cortocircuito es informativa y no condiciona la sección seleccionada
- el conductor de protección comparte material y aislamiento con los de fase

Algunas restricciones pueden revisarse en el futuro, tales como:

- dimensionado del conductor neutro con cargas ricas en armónicos
- interpolación de factores de corrección para otras profundidades de enterramiento

# Ejemplo

```rust
use rebtcable::*;

// Línea trifásica de 50 A y 30 m de cobre con aislamiento XLPE,
// sobre bandeja perforada (método de instalación E)
let mut input = CableInput::new(50.0, 30.0);
input.method = InstallMethod::E;
input.cos_phi = 0.9;

// Dimensionado con el límite reglamentario de caída de tensión
let sizing = cable_sizing(&input, rebt::VDROP_LIMIT_DEFAULT).unwrap();
assert_eq!(sizing.section, 6.0);

// Visualización compacta
println!("{}", sizing.to_plain());
```

*/

#![deny(missing_docs)]

#[cfg(test)] // <-- not needed in examples + integration tests
#[macro_use]
extern crate pretty_assertions;

mod asplain;
mod derating;
mod protection;
mod shortcircuit;
mod sizing;
mod vdrop;

pub mod error;
pub mod rebt;
pub mod types;

pub use asplain::*;
pub use derating::*;
pub use protection::*;
pub use shortcircuit::*;
pub use sizing::*;
pub use types::*;
pub use vdrop::*;

/// Número de versión de la librería
///
/// Version number
pub static VERSION: &str = env!("CARGO_PKG_VERSION");
