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

use std::fmt;
use std::str;

use serde::{Deserialize, Serialize};

use crate::error::CableError;

// ==================== Common types (line configuration)

// -------------------- Material

/// Material conductor (conductor material).
#[allow(non_camel_case_types)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Material {
    /// Copper conductor
    COBRE,
    /// Aluminum conductor
    ALUMINIO,
}

impl str::FromStr for Material {
    type Err = CableError;

    fn from_str(s: &str) -> Result<Material, Self::Err> {
        match s {
            "COBRE" => Ok(Material::COBRE),
            "ALUMINIO" => Ok(Material::ALUMINIO),
            // Legacy
            "Cu" => Ok(Material::COBRE),
            "Al" => Ok(Material::ALUMINIO),
            _ => Err(CableError::ParseError(s.into())),
        }
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

// -------------------- Insulation

/// Aislamiento del cable (cable insulation).
///
/// La clase de aislamiento fija la temperatura máxima de servicio del conductor
/// (90 °C para XLPE, 70 °C para PVC) y, con ella, la tabla de intensidades admisibles
/// y las resistencias a temperatura de servicio.
#[allow(non_camel_case_types)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Insulation {
    /// Cross-linked polyethylene, 90 °C service temperature
    XLPE,
    /// Polyvinyl chloride, 70 °C service temperature
    PVC,
}

impl str::FromStr for Insulation {
    type Err = CableError;

    fn from_str(s: &str) -> Result<Insulation, Self::Err> {
        match s {
            "XLPE" => Ok(Insulation::XLPE),
            "PVC" => Ok(Insulation::PVC),
            _ => Err(CableError::ParseError(s.into())),
        }
    }
}

impl std::fmt::Display for Insulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

// -------------------- InstallMethod

/// Método de instalación de referencia (UNE-HD 60364-5-52).
#[allow(non_camel_case_types)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstallMethod {
    /// Method C (clipped direct to a wall)
    C,
    /// Method D (buried ducts or direct burial)
    D,
    /// Method E (perforated cable tray)
    E,
    /// Method F (cable ladder, free air)
    F,
}

impl InstallMethod {
    /// Indica si el método corresponde a una instalación enterrada
    ///
    /// Solo a los métodos enterrados les aplica la corrección por profundidad de soterramiento.
    pub fn is_buried(&self) -> bool {
        *self == InstallMethod::D
    }
}

impl str::FromStr for InstallMethod {
    type Err = CableError;

    fn from_str(s: &str) -> Result<InstallMethod, Self::Err> {
        match s {
            "C" => Ok(InstallMethod::C),
            "D" => Ok(InstallMethod::D),
            "E" => Ok(InstallMethod::E),
            "F" => Ok(InstallMethod::F),
            _ => Err(CableError::ParseError(s.into())),
        }
    }
}

impl std::fmt::Display for InstallMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

// -------------------- PhaseSystem

/// Sistema de distribución (phase system).
#[allow(non_camel_case_types)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhaseSystem {
    /// Three-phase line, 400 V
    TRIFASICO,
    /// Single-phase line, 230 V
    MONOFASICO,
}

impl PhaseSystem {
    /// Tensión nominal de línea [V]
    pub fn voltage(&self) -> f32 {
        match self {
            PhaseSystem::TRIFASICO => 400.0,
            PhaseSystem::MONOFASICO => 230.0,
        }
    }
}

impl str::FromStr for PhaseSystem {
    type Err = CableError;

    fn from_str(s: &str) -> Result<PhaseSystem, Self::Err> {
        match s {
            "TRIFASICO" => Ok(PhaseSystem::TRIFASICO),
            "MONOFASICO" => Ok(PhaseSystem::MONOFASICO),
            // Legacy
            "3F" => Ok(PhaseSystem::TRIFASICO),
            "1F" => Ok(PhaseSystem::MONOFASICO),
            _ => Err(CableError::ParseError(s.into())),
        }
    }
}

impl std::fmt::Display for PhaseSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Default for PhaseSystem {
    fn default() -> PhaseSystem {
        PhaseSystem::TRIFASICO
    }
}

// -------------------- BurialDepth

/// Profundidad de soterramiento para el método D (burial depth).
#[allow(non_camel_case_types)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BurialDepth {
    /// Buried at 0.5 m
    P050,
    /// Buried at 0.7 m
    P070,
    /// Buried at 1.0 m
    P100,
}

impl str::FromStr for BurialDepth {
    type Err = CableError;

    fn from_str(s: &str) -> Result<BurialDepth, Self::Err> {
        match s {
            "0.5" => Ok(BurialDepth::P050),
            "0.7" => Ok(BurialDepth::P070),
            "1.0" => Ok(BurialDepth::P100),
            // Legacy
            "0.5m" => Ok(BurialDepth::P050),
            "0.7m" => Ok(BurialDepth::P070),
            "1.0m" => Ok(BurialDepth::P100),
            _ => Err(CableError::ParseError(s.into())),
        }
    }
}

impl std::fmt::Display for BurialDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BurialDepth::P050 => write!(f, "0.5m"),
            BurialDepth::P070 => write!(f, "0.7m"),
            BurialDepth::P100 => write!(f, "1.0m"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tparse() {
        assert_eq!("COBRE".parse::<Material>().unwrap(), Material::COBRE);
        assert_eq!("Al".parse::<Material>().unwrap(), Material::ALUMINIO);
        assert_eq!("XLPE".parse::<Insulation>().unwrap(), Insulation::XLPE);
        assert_eq!("D".parse::<InstallMethod>().unwrap(), InstallMethod::D);
        assert_eq!(
            "MONOFASICO".parse::<PhaseSystem>().unwrap(),
            PhaseSystem::MONOFASICO
        );
        assert_eq!("0.7".parse::<BurialDepth>().unwrap(), BurialDepth::P070);
        assert_eq!("0.7m".parse::<BurialDepth>().unwrap(), BurialDepth::P070);
        assert!("cobre".parse::<Material>().is_err());
    }

    #[test]
    fn tdisplay() {
        assert_eq!(format!("{}", Material::COBRE), "COBRE");
        assert_eq!(format!("{}", InstallMethod::E), "E");
        assert_eq!(format!("{}", BurialDepth::P050), "0.5m");
    }

    #[test]
    fn tvoltage() {
        assert_eq!(PhaseSystem::TRIFASICO.voltage(), 400.0);
        assert_eq!(PhaseSystem::MONOFASICO.voltage(), 230.0);
    }

    #[test]
    fn tburied() {
        assert!(InstallMethod::D.is_buried());
        assert!(!InstallMethod::C.is_buried());
        assert!(!InstallMethod::F.is_buried());
    }
}
