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

use itertools::Itertools; // join

use crate::rebt::ZE_DEFAULT;
use crate::shortcircuit::ScVerdict;
use crate::sizing::{SizeCase, Sizing};

// ==================== Conversión a formato simple

/// Muestra en formato simple
///
/// Esta función usa un formato simple y compacto para representar los datos de
/// partida y los resultados del dimensionado de la línea
pub trait AsRebtPlain {
    /// Get in plain format
    fn to_plain(&self) -> String;
}

// ================= Implementaciones ====================

/// Muestra un valor opcional con la precisión deseada o como un guion si no está presente
fn value_or_dash(v: Option<f32>, precision: usize) -> String {
    match v {
        Some(v) => format!("{:.*}", precision, v),
        None => "-".to_string(),
    }
}

/// Convierte el resultado de la comprobación de cortocircuito a String
fn sc2string(v: ScVerdict) -> String {
    match v {
        ScVerdict::NotEvaluated => "no evaluado".to_string(),
        ScVerdict::Pass { min_section } => {
            format!("CUMPLE (sección mínima {:.2} mm2)", min_section)
        }
        ScVerdict::Fail { min_section } => {
            format!("NO CUMPLE (sección mínima {:.2} mm2)", min_section)
        }
    }
}

fn okmark(ok: bool) -> &'static str {
    if ok {
        "SI"
    } else {
        "NO"
    }
}

impl AsRebtPlain for Sizing {
    /// Está mostrando los datos de partida y el resultado del dimensionado
    fn to_plain(&self) -> String {
        // Datos de partida
        let input = &self.input;
        let ib = input.ib;
        let length = input.length;
        let material = input.material;
        let insulation = input.insulation;
        let method = input.method;
        let phase = input.phase;
        let voltage = phase.voltage();
        let cos_phi = input.cos_phi;
        let parallel = input.parallel;
        let k_total = self.k_total;
        let ze = input.ze.unwrap_or(ZE_DEFAULT);
        let fault = match input.fault {
            Some(f) => format!("Icc = {:.1} [kA], t = {:.2} [s]", f.isc, f.t),
            None => "-".to_string(),
        };
        // Resultado
        let section = self.section;
        let iz_base = self.iz_base;
        let iz_eff = self.iz_eff;
        let vdrop_volts = self.vdrop_volts;
        let vdrop_pct = self.vdrop_pct;
        let vdrop_limit = self.vdrop_limit;
        let sc = sc2string(self.sc);
        let breaker = match self.breaker {
            Some(rating) => format!("{} [A]", rating),
            None => "sin calibre adecuado".to_string(),
        };
        let zs = self.zs;
        let cost = value_or_dash(self.cost, 2);

        format!(
            "** Dimensionado de línea de BT

Ib = {ib:.2} [A]
Longitud = {length:.2} [m]
Conductor: {material}, aislamiento {insulation}, método de instalación {method}
Sistema: {phase}, U = {voltage:.0} [V], cos φ = {cos_phi:.2}
Conductores por fase: {parallel}
Factor de corrección total: {k_total:.3}
Cortocircuito previsto: {fault}

** Resultado

Sección: {section} [mm2]
Iz de referencia = {iz_base:.1} [A]
Iz corregida = {iz_eff:.1} [A]
Caída de tensión = {vdrop_volts:.2} [V] ({vdrop_pct:.2} %, límite {vdrop_limit:.2} %)
Cortocircuito: {sc}
Protección: {breaker}
Zs = {zs:.3} [Ω] (Ze = {ze:.2} [Ω])
Coste del cable: {cost} [€]
"
        )
    }
}

/// Estudio comparado de las secciones normalizadas en formato simple
///
/// Una línea por sección, con la intensidad admisible corregida y la caída de
/// tensión, marcando el cumplimiento de cada criterio.
pub fn study_plain(cases: &[SizeCase]) -> String {
    let lines = cases
        .iter()
        .map(|case| {
            let sc = match case.sc {
                ScVerdict::NotEvaluated => String::new(),
                ScVerdict::Pass { .. } => ", Icc CUMPLE".to_string(),
                ScVerdict::Fail { .. } => ", Icc NO CUMPLE".to_string(),
            };
            format!(
                "- {:5.1} mm2: Iz = {:6.1} [A] [{}], caída = {:5.2} [%] [{}]{}",
                case.section,
                case.iz_eff,
                okmark(case.ampacity_ok),
                case.vdrop_pct,
                okmark(case.vdrop_ok),
                sc
            )
        })
        .join("\n");
    format!("** Estudio de secciones normalizadas\n\n{}\n", lines)
}
