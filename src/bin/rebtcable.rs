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

#[macro_use]
extern crate clap;

use exitcode;

use serde_json;

use std::fs::File;
use std::io::prelude::*;
use std::path::Path;
use std::process::exit;
use std::str::FromStr;

use clap::{App, AppSettings, Arg};

use rebtcable::error::CableError;
use rebtcable::*;

// Funciones auxiliares -----------------------------------------------------------------------

fn writefile(path: &Path, content: &[u8]) {
    if let Err(err) = File::create(path).and_then(|mut file| file.write_all(content)) {
        eprintln!(
            "ERROR: no se ha podido escribir en \"{}\": {}",
            path.display(),
            err
        );
        exit(exitcode::IOERR);
    }
}

/// Obtiene un valor numérico de la CLI o termina con un mensaje de error.
fn get_f32(matches: &clap::ArgMatches<'_>, name: &str, descr: &str) -> f32 {
    value_t!(matches, name, f32).unwrap_or_else(|error| {
        eprintln!("ERROR: el valor de {} no es un número válido", descr);
        eprintln!("{}", error);
        exit(exitcode::DATAERR);
    })
}

/// Interpreta una de las opciones de enumeración de la CLI.
fn parse_arg<T>(value: &str, descr: &str) -> T
where
    T: FromStr<Err = CableError>,
{
    value.parse::<T>().unwrap_or_else(|error| {
        eprintln!("ERROR: valor incorrecto de {}", descr);
        eprintln!("{}", error);
        exit(exitcode::DATAERR);
    })
}

// Función principal ------------------------------------------------------------------------------

fn main() {
    let matches = App::new("RebtCable")
        .bin_name("rebtcable")
        .version(env!("CARGO_PKG_VERSION"))
        .author("
Copyright (c) 2018-2022 Ministerio de Fomento,
                        Instituto de CC. de la Construcción Eduardo Torroja (IETcc-CSIC)

Autores: Rafael Villar Burke <pachi@ietcc.csic.es>,
         Daniel Jiménez González <dani@ietcc.csic.es>
         Marta Sorribes Gil <msorribes@ietcc.csic.es>

Licencia: Publicado bajo licencia MIT.

")
        .about("RebtCable - Dimensionado de líneas eléctricas de BT (REBT, UNE-HD 60364-5-52).")
        .setting(AppSettings::NextLineHelp)
        .arg(Arg::with_name("ib")
            .short("i")
            .long("ib")
            .value_name("IB")
            .required(true)
            .help("Intensidad de cálculo de la línea Ib [A]")
            .takes_value(true)
            .display_order(1))
        .arg(Arg::with_name("longitud")
            .short("l")
            .long("longitud")
            .value_name("LONGITUD")
            .required(true)
            .help("Longitud de la línea [m]")
            .takes_value(true)
            .display_order(2))
        .arg(Arg::with_name("material")
            .long("material")
            .value_name("MATERIAL")
            .possible_values(&["COBRE", "ALUMINIO"])
            .default_value("COBRE")
            .help("Material del conductor")
            .takes_value(true)
            .display_order(3))
        .arg(Arg::with_name("aislamiento")
            .long("aislamiento")
            .value_name("AISLAMIENTO")
            .possible_values(&["XLPE", "PVC"])
            .default_value("XLPE")
            .help("Aislamiento del conductor")
            .takes_value(true)
            .display_order(4))
        .arg(Arg::with_name("metodo")
            .long("metodo")
            .value_name("METODO")
            .possible_values(&["C", "D", "E", "F"])
            .default_value("C")
            .help("Método de instalación según UNE-HD 60364-5-52\n")
            .takes_value(true)
            .display_order(5))
        .arg(Arg::with_name("fases")
            .long("fases")
            .value_name("FASES")
            .possible_values(&["TRIFASICO", "MONOFASICO"])
            .default_value("TRIFASICO")
            .help("Sistema de alimentación de la línea")
            .takes_value(true)
            .display_order(6))
        .arg(Arg::with_name("cosfi")
            .long("cosfi")
            .value_name("COSFI")
            .default_value("0.85")
            .help("Factor de potencia de la carga (cos φ)")
            .takes_value(true)
            .display_order(7))
        .arg(Arg::with_name("kt")
            .long("kt")
            .value_name("KT")
            .default_value("1.0")
            .help("Factor de corrección por temperatura")
            .takes_value(true))
        .arg(Arg::with_name("kg")
            .long("kg")
            .value_name("KG")
            .default_value("1.0")
            .help("Factor de corrección por agrupamiento")
            .takes_value(true))
        .arg(Arg::with_name("ks")
            .long("ks")
            .value_name("KS")
            .default_value("1.0")
            .help("Factor de corrección por resistividad del terreno")
            .takes_value(true))
        .arg(Arg::with_name("profundidad")
            .long("profundidad")
            .value_name("PROFUNDIDAD")
            .possible_values(&["0.5", "0.7", "1.0"])
            .help("Profundidad de enterramiento [m] (solo método D)")
            .takes_value(true))
        .arg(Arg::with_name("paralelo")
            .long("paralelo")
            .value_name("PARALELO")
            .default_value("1")
            .help("Número de conductores por fase (1 a 4)")
            .takes_value(true))
        .arg(Arg::with_name("icc")
            .long("icc")
            .value_name("ICC")
            .help("Corriente de cortocircuito prevista [kA]")
            .takes_value(true))
        .arg(Arg::with_name("ticc")
            .long("ticc")
            .value_name("TICC")
            .requires("icc")
            .help("Tiempo de despeje del defecto [s] (por defecto 1.0)")
            .takes_value(true))
        .arg(Arg::with_name("coste")
            .long("coste")
            .value_name("COSTE")
            .help("Coste unitario del cable [€/m]")
            .takes_value(true))
        .arg(Arg::with_name("seccion_pe")
            .long("seccion_pe")
            .value_name("SECCION_PE")
            .help("Sección del conductor de protección [mm2], si difiere de la de fase")
            .takes_value(true))
        .arg(Arg::with_name("ze")
            .long("ze")
            .value_name("ZE")
            .help("Impedancia externa del bucle de defecto Ze [Ω] (por defecto 0.35)")
            .takes_value(true))
        .arg(Arg::with_name("caida")
            .long("caida")
            .value_name("CAIDA")
            .default_value("5.0")
            .help("Límite de caída de tensión [%]")
            .takes_value(true))
        .arg(Arg::with_name("estudio")
            .short("e")
            .long("estudio")
            .help("Muestra el estudio de todas las secciones normalizadas"))
        .arg(Arg::with_name("archivo_salida_json")
            .long("json")
            .value_name("ARCHIVO_SALIDA_JSON")
            .help("Archivo de salida de resultados detallados en formato JSON")
            .takes_value(true))
        .arg(Arg::with_name("showlicense")
            .short("L")
            .long("licencia")
            .help("Muestra la licencia del programa (MIT)"))
        .arg(Arg::with_name("v")
            .short("v")
            .multiple(true)
            .help("Sets the level of verbosity"))
        .get_matches();

    if matches.is_present("showlicense") {
        println!(
            "
Copyright (c) 2018-2022 Ministerio de Fomento
                        Instituto de Ciencias de la Construcción Eduardo Torroja (IETcc-CSIC)

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the 'Software'), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in
all copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED 'AS IS', WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.

Author(s): Rafael Villar Burke <pachi@ietcc.csic.es>
            Daniel Jiménez González <dani@ietcc.csic.es>
            Marta Sorribes Gil <msorribes@ietcc.csic.es>"
        );
        exit(exitcode::OK);
    }

    // Prólogo ------------------------------------------------------------------------------------

    let verbosity = matches.occurrences_of("v");

    if verbosity > 2 {
        println!("Opciones indicadas: ----------");
        println!("{:#?}", matches);
        println!("------------------------------");
    }

    // Datos de entrada ---------------------------------------------------------------------------

    let mut input = CableInput::new(
        get_f32(&matches, "ib", "la intensidad de cálculo"),
        get_f32(&matches, "longitud", "la longitud de la línea"),
    );
    input.material = parse_arg(matches.value_of("material").unwrap(), "material");
    input.insulation = parse_arg(matches.value_of("aislamiento").unwrap(), "aislamiento");
    input.method = parse_arg(matches.value_of("metodo").unwrap(), "método de instalación");
    input.phase = parse_arg(matches.value_of("fases").unwrap(), "sistema de alimentación");
    input.cos_phi = get_f32(&matches, "cosfi", "el factor de potencia");
    input.k_temp = get_f32(&matches, "kt", "el factor de temperatura");
    input.k_group = get_f32(&matches, "kg", "el factor de agrupamiento");
    input.k_soil = get_f32(&matches, "ks", "el factor de resistividad del terreno");
    if matches.is_present("profundidad") {
        input.burial_depth = Some(parse_arg(
            matches.value_of("profundidad").unwrap(),
            "profundidad de enterramiento",
        ));
    }
    input.parallel = value_t!(matches, "paralelo", u32).unwrap_or_else(|error| {
        eprintln!("ERROR: el número de conductores por fase no es un valor válido");
        eprintln!("{}", error);
        exit(exitcode::DATAERR);
    });
    if matches.is_present("icc") {
        let isc = get_f32(&matches, "icc", "la corriente de cortocircuito");
        let t = if matches.is_present("ticc") {
            get_f32(&matches, "ticc", "el tiempo de despeje del defecto")
        } else {
            1.0
        };
        input.fault = Some(FaultParams::new(isc, t));
    }
    if matches.is_present("coste") {
        input.unit_cost = Some(get_f32(&matches, "coste", "el coste unitario del cable"));
    }
    if matches.is_present("seccion_pe") {
        input.pe_section = Some(get_f32(
            &matches,
            "seccion_pe",
            "la sección del conductor de protección",
        ));
    }
    if matches.is_present("ze") {
        input.ze = Some(get_f32(&matches, "ze", "la impedancia externa del bucle"));
    }

    let vdrop_limit = get_f32(&matches, "caida", "el límite de caída de tensión");
    if vdrop_limit != rebt::VDROP_LIMIT_DEFAULT {
        println!(
            "AVISO: límite de caída de tensión ({:.2} %) distinto al valor habitual ({:.2} %)",
            vdrop_limit,
            rebt::VDROP_LIMIT_DEFAULT
        );
    }

    // Estudio de secciones -----------------------------------------------------------------------

    if matches.is_present("estudio") {
        let cases = assess_sizes(&input, vdrop_limit).unwrap_or_else(|error| {
            eprintln!("ERROR: no se ha podido realizar el estudio de secciones");
            eprintln!("{}", error);
            exit(exitcode::DATAERR);
        });
        println!("{}", study_plain(&cases));
    }

    // Dimensionado -------------------------------------------------------------------------------

    let sizing = cable_sizing(&input, vdrop_limit).unwrap_or_else(|error| {
        eprintln!("ERROR: no se ha podido dimensionar la línea");
        eprintln!("{}", error);
        exit(exitcode::DATAERR);
    });

    // Salida de resultados -----------------------------------------------------------------------

    // Guardar resultados en formato json
    if matches.is_present("archivo_salida_json") {
        let path = Path::new(matches.value_of_os("archivo_salida_json").unwrap());
        if verbosity > 0 {
            println!("Resultados en formato JSON: {:?}", path.display());
        }
        let json = serde_json::to_string_pretty(&sizing).unwrap_or_else(|error| {
            eprintln!("ERROR: No se ha podido convertir el resultado al formato JSON");
            if verbosity > 2 {
                println!("{:?}", error)
            };
            exit(exitcode::DATAERR);
        });
        writefile(path, json.as_bytes());
    }

    // Mostrar siempre en formato plain
    println!("{}", sizing.to_plain());

    // Coste orientativo de la tabla de referencia si no se aportó un coste unitario
    if input.unit_cost.is_none() {
        if let Some(unit) = rebt::unit_cost(input.material, sizing.section) {
            println!(
                "Coste orientativo (tabla de referencia): {:.2} [€] ({:.2} [€/m])",
                cost_estimate(unit, input.length, input.parallel),
                unit
            );
        }
    }

    println!("{}", rebt::DISCLAIMER);
}
