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

/*! #Valores reglamentarios para el dimensionado de líneas de BT

Tablas de la norma UNE-HD 60364-5-52 tal como las adopta el REBT (ITC-BT):
intensidades admisibles, resistencias y reactancias de los conductores,
constantes de cortocircuito y series normalizadas de secciones y protecciones.

Los valores de intensidad admisible corresponden a conductores cargados en
las condiciones de referencia de cada método de instalación; las resistencias
están tabuladas a la temperatura de servicio del aislamiento (90 °C para XLPE,
70 °C para PVC).
*/

/// Secciones normalizadas de conductor [mm²], en orden estrictamente creciente.
pub const SECTIONS: [f32; 16] = [
    1.5, 2.5, 4.0, 6.0, 10.0, 16.0, 25.0, 35.0, 50.0, 70.0, 95.0, 120.0, 150.0, 185.0, 240.0,
    300.0,
];

/// Límite reglamentario de caída de tensión [%]. Valor orientativo general.
pub const VDROP_LIMIT_DEFAULT: f32 = 5.0;

/// Impedancia externa típica del bucle de defecto a tierra Ze [Ω].
pub const ZE_DEFAULT: f32 = 0.35;

/// Serie normalizada de calibres de interruptor automático [A].
pub const MCB_RATINGS: [u32; 19] = [
    6, 10, 16, 20, 25, 32, 40, 50, 63, 80, 100, 125, 160, 200, 250, 315, 400, 500, 630,
];

/// Aviso sobre el alcance del cálculo.
pub const DISCLAIMER: &str = "AVISO: cálculo orientativo basado en las tablas de la norma \
UNE-HD 60364-5-52. Verifique las características con los datos del fabricante y la \
reglamentación aplicable (REBT) antes de la ejecución.";

// ================== Intensidades admisibles [A] ==================
// Una tabla por (aislamiento, material, método); los métodos E y F
// comparten valores de referencia.

/// Intensidades admisibles [A], cobre, XLPE, método C.
pub const AMPACITY_XLPE_CU_C: [u16; 16] = [
    19, 26, 35, 45, 61, 81, 106, 131, 158, 200, 241, 278, 318, 362, 424, 486,
];
/// Intensidades admisibles [A], cobre, XLPE, método D.
pub const AMPACITY_XLPE_CU_D: [u16; 16] = [
    22, 29, 38, 47, 63, 81, 104, 125, 148, 183, 216, 246, 278, 312, 361, 408,
];
/// Intensidades admisibles [A], cobre, XLPE, métodos E y F.
pub const AMPACITY_XLPE_CU_EF: [u16; 16] = [
    22, 30, 40, 51, 70, 94, 119, 148, 180, 232, 282, 328, 379, 434, 514, 593,
];

/// Intensidades admisibles [A], aluminio, XLPE, método C.
pub const AMPACITY_XLPE_AL_C: [u16; 16] = [
    14, 20, 27, 35, 47, 63, 83, 102, 123, 156, 188, 216, 247, 283, 330, 379,
];
/// Intensidades admisibles [A], aluminio, XLPE, método D.
pub const AMPACITY_XLPE_AL_D: [u16; 16] = [
    17, 22, 29, 36, 49, 62, 80, 96, 113, 140, 166, 189, 213, 240, 277, 313,
];
/// Intensidades admisibles [A], aluminio, XLPE, métodos E y F.
pub const AMPACITY_XLPE_AL_EF: [u16; 16] = [
    17, 23, 31, 40, 53, 73, 93, 116, 140, 181, 220, 255, 294, 339, 400, 464,
];

/// Intensidades admisibles [A], cobre, PVC, método C.
pub const AMPACITY_PVC_CU_C: [u16; 16] = [
    15, 21, 28, 36, 50, 68, 89, 110, 134, 171, 207, 239, 275, 314, 369, 424,
];
/// Intensidades admisibles [A], cobre, PVC, método D.
pub const AMPACITY_PVC_CU_D: [u16; 16] = [
    18, 24, 31, 39, 52, 67, 86, 103, 122, 151, 179, 203, 230, 258, 297, 336,
];
/// Intensidades admisibles [A], cobre, PVC, métodos E y F.
pub const AMPACITY_PVC_CU_EF: [u16; 16] = [
    17, 24, 32, 41, 57, 76, 96, 119, 144, 184, 223, 259, 299, 341, 403, 464,
];

/// Intensidades admisibles [A], aluminio, PVC, método C.
pub const AMPACITY_PVC_AL_C: [u16; 16] = [
    12, 16, 22, 28, 39, 53, 69, 86, 104, 133, 161, 186, 214, 245, 287, 330,
];
/// Intensidades admisibles [A], aluminio, PVC, método D.
pub const AMPACITY_PVC_AL_D: [u16; 16] = [
    14, 18, 24, 30, 40, 52, 66, 80, 94, 117, 138, 157, 178, 200, 230, 260,
];
/// Intensidades admisibles [A], aluminio, PVC, métodos E y F.
pub const AMPACITY_PVC_AL_EF: [u16; 16] = [
    13, 18, 25, 32, 44, 59, 75, 92, 112, 143, 174, 201, 232, 265, 314, 361,
];

// ================== Resistencias y reactancias [Ω/km] ==================

/// Resistencia en alterna [Ω/km] a 90 °C, cobre, XLPE.
pub const RESISTANCE_XLPE_CU: [f32; 16] = [
    14.8, 8.87, 5.52, 3.69, 2.19, 1.38, 0.868, 0.625, 0.463, 0.321, 0.232, 0.184, 0.150, 0.121,
    0.0958, 0.0780,
];
/// Resistencia en alterna [Ω/km] a 90 °C, aluminio, XLPE.
pub const RESISTANCE_XLPE_AL: [f32; 16] = [
    24.4, 14.6, 9.09, 6.07, 3.61, 2.27, 1.43, 1.03, 0.762, 0.529, 0.382, 0.303, 0.247, 0.199,
    0.158, 0.128,
];
/// Resistencia en alterna [Ω/km] a 70 °C, cobre, PVC.
pub const RESISTANCE_PVC_CU: [f32; 16] = [
    13.7, 8.21, 5.09, 3.39, 2.01, 1.26, 0.795, 0.572, 0.424, 0.294, 0.213, 0.169, 0.137, 0.111,
    0.0876, 0.0712,
];
/// Resistencia en alterna [Ω/km] a 70 °C, aluminio, PVC.
pub const RESISTANCE_PVC_AL: [f32; 16] = [
    22.5, 13.5, 8.36, 5.58, 3.31, 2.08, 1.31, 0.942, 0.699, 0.485, 0.351, 0.278, 0.226, 0.183,
    0.145, 0.118,
];

/// Reactancia [Ω/km], conductores de cobre.
pub const REACTANCE_CU: [f32; 16] = [
    0.115, 0.110, 0.107, 0.100, 0.094, 0.090, 0.086, 0.083, 0.080, 0.078, 0.076, 0.075, 0.074,
    0.073, 0.072, 0.071,
];
/// Reactancia [Ω/km], conductores de aluminio.
pub const REACTANCE_AL: [f32; 16] = [
    0.118, 0.112, 0.110, 0.103, 0.097, 0.093, 0.089, 0.086, 0.083, 0.081, 0.079, 0.078, 0.076,
    0.075, 0.074, 0.073,
];

// ================== Costes orientativos [€/m] ==================
// Precios de referencia editables por el usuario; el cálculo solo los usa
// cuando no se aporta un coste unitario propio.

/// Coste orientativo del cable [€/m] por sección, conductores de cobre.
pub const COST_CU: [f32; 16] = [
    0.50, 0.75, 1.10, 1.50, 2.50, 4.00, 6.00, 8.50, 12.00, 17.00, 23.00, 29.00, 36.00, 45.00,
    58.00, 73.00,
];
/// Coste orientativo del cable [€/m] por sección, conductores de aluminio.
pub const COST_AL: [f32; 16] = [
    0.30, 0.45, 0.65, 0.90, 1.50, 2.40, 3.60, 5.10, 7.20, 10.20, 13.80, 17.40, 21.60, 27.00,
    34.80, 43.80,
];
