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

/*!
Errores (errors)
================

Tipo de error del cálculo de secciones y alias de `Result` para toda la biblioteca.

*/

use std::fmt;

/// Error del dimensionado de cables
#[derive(Debug)]
pub enum CableError {
    /// Formato de dato incorrecto (texto no interpretable)
    ParseError(String),
    /// Dato de entrada inválido
    WrongInput(String),
    /// Sección no disponible en las tablas para la configuración pedida
    SectionUnknown(String),
    /// Ninguna sección normalizada cumple los criterios de selección
    NoSolution(String),
}

impl fmt::Display for CableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CableError::ParseError(detail) => write!(f, "Error de formato: {}", detail),
            CableError::WrongInput(detail) => write!(f, "Dato de entrada incorrecto: {}", detail),
            CableError::SectionUnknown(detail) => write!(f, "Sección desconocida: {}", detail),
            CableError::NoSolution(detail) => write!(f, "Sin solución: {}", detail),
        }
    }
}

impl std::error::Error for CableError {}

impl From<std::num::ParseFloatError> for CableError {
    fn from(err: std::num::ParseFloatError) -> Self {
        CableError::ParseError(err.to_string())
    }
}

/// Resultado con error de dimensionado
pub type Result<T> = std::result::Result<T, CableError>;
