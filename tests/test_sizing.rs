use pretty_assertions::assert_eq;

use rebtcable::error::CableError;
use rebtcable::{rebt, *};

/// Compara con una tolerancia absoluta y muestra la diferencia en caso de desajuste
pub fn approx_equal(expected: f32, got: f32, tol: f32) -> bool {
    let dif = expected - got;
    let res = dif.abs() < tol;
    if !res {
        eprintln!("Expected: {}, Got: {}, Diff: {:?}", expected, got, dif);
    }
    res
}

/// Línea trifásica de cobre XLPE en bandeja perforada con cos φ = 0.9
fn tray_input(ib: f32, length: f32) -> CableInput {
    let mut input = CableInput::new(ib, length);
    input.method = InstallMethod::E;
    input.cos_phi = 0.9;
    input
}

#[test]
fn linea_basica() {
    let sizing = cable_sizing(&tray_input(50.0, 30.0), rebt::VDROP_LIMIT_DEFAULT).unwrap();
    assert_eq!(sizing.section, 6.0);
    assert_eq!(sizing.iz_base, 51.0);
    assert_eq!(sizing.iz_eff, 51.0);
    assert!(approx_equal(8.741459, sizing.vdrop_volts, 1e-3));
    assert!(approx_equal(2.185365, sizing.vdrop_pct, 1e-3));
    assert_eq!(sizing.breaker, Some(50));
    assert_eq!(sizing.sc, ScVerdict::NotEvaluated);
    assert!(approx_equal(0.5714, sizing.zs, 1e-4));
    assert_eq!(sizing.cost, None);
}

#[test]
fn linea_150a() {
    let sizing = cable_sizing(&tray_input(150.0, 75.0), rebt::VDROP_LIMIT_DEFAULT).unwrap();
    assert_eq!(sizing.section, 50.0);
    assert_eq!(sizing.iz_eff, 180.0);
    assert!(approx_equal(8.799123, sizing.vdrop_volts, 1e-3));
    assert!(approx_equal(2.199781, sizing.vdrop_pct, 1e-3));
    assert_eq!(sizing.breaker, Some(160));
}

#[test]
fn cortocircuito() {
    let mut input = tray_input(150.0, 75.0);
    input.fault = Some(FaultParams::new(10.0, 0.2));
    let sizing = cable_sizing(&input, rebt::VDROP_LIMIT_DEFAULT).unwrap();
    // la selección no cambia por el cortocircuito
    assert_eq!(sizing.section, 50.0);
    match sizing.sc {
        ScVerdict::Pass { min_section } => assert!(approx_equal(31.273678, min_section, 1e-3)),
        other => panic!("Pass esperado, obtenido {:?}", other),
    }
    // en el estudio, las secciones menores que la mínima térmica no cumplen
    let cases = assess_sizes(&input, rebt::VDROP_LIMIT_DEFAULT).unwrap();
    match cases[3].sc {
        ScVerdict::Fail { min_section } => assert!(approx_equal(31.273678, min_section, 1e-3)),
        other => panic!("Fail esperado para 6 mm2, obtenido {:?}", other),
    }
}

#[test]
fn sin_solucion() {
    match cable_sizing(&tray_input(5000.0, 30.0), rebt::VDROP_LIMIT_DEFAULT) {
        Err(CableError::NoSolution(_)) => (),
        other => panic!("NoSolution esperado, obtenido {:?}", other),
    }
    // tampoco con el máximo de conductores en paralelo
    let mut input = tray_input(5000.0, 30.0);
    input.parallel = 4;
    assert!(cable_sizing(&input, rebt::VDROP_LIMIT_DEFAULT).is_err());
}

#[test]
fn linea_enterrada() {
    let mut input = CableInput::new(40.0, 60.0);
    input.insulation = Insulation::PVC;
    input.method = InstallMethod::D;
    input.burial_depth = Some(BurialDepth::P070);
    input.k_group = 0.8;
    input.k_soil = 0.9;
    let sizing = cable_sizing(&input, rebt::VDROP_LIMIT_DEFAULT).unwrap();
    assert!(approx_equal(0.6984, sizing.k_total, 1e-4));
    assert_eq!(sizing.section, 16.0);
    assert!(approx_equal(46.7928, sizing.iz_eff, 1e-3));
    assert!(approx_equal(1.162286, sizing.vdrop_pct, 1e-3));
    assert_eq!(sizing.breaker, Some(40));
}

#[test]
fn caida_restrictiva() {
    // con 300 m la caída de tensión descarta varias secciones que sí
    // cumplen el criterio de intensidad admisible
    let input = tray_input(50.0, 300.0);
    let sizing = cable_sizing(&input, rebt::VDROP_LIMIT_DEFAULT).unwrap();
    assert_eq!(sizing.section, 35.0);
    assert!(approx_equal(3.888602, sizing.vdrop_pct, 1e-3));
    let cases = assess_sizes(&input, rebt::VDROP_LIMIT_DEFAULT).unwrap();
    // 25 mm2 cumple intensidad admisible pero no caída de tensión
    assert_eq!(cases[6].section, 25.0);
    assert!(cases[6].ampacity_ok);
    assert!(!cases[6].vdrop_ok);
    assert!(approx_equal(5.3175, cases[6].vdrop_pct, 1e-3));
}

#[test]
fn linea_aluminio() {
    let mut input = CableInput::new(30.0, 25.0);
    input.material = Material::ALUMINIO;
    input.insulation = Insulation::PVC;
    let sizing = cable_sizing(&input, rebt::VDROP_LIMIT_DEFAULT).unwrap();
    assert_eq!(sizing.section, 10.0);
    assert_eq!(sizing.iz_eff, 39.0);
    assert!(approx_equal(0.930305, sizing.vdrop_pct, 1e-3));
    assert_eq!(sizing.breaker, Some(32));
    assert!(approx_equal(0.5155, sizing.zs, 1e-4));

    // comprobación térmica con 6 kA y 0.5 s (k = 76)
    input.fault = Some(FaultParams::new(6.0, 0.5));
    let sizing = cable_sizing(&input, rebt::VDROP_LIMIT_DEFAULT).unwrap();
    match sizing.sc {
        ScVerdict::Fail { min_section } => assert!(approx_equal(55.8242, min_section, 1e-3)),
        other => panic!("Fail esperado, obtenido {:?}", other),
    }
}

#[test]
fn conductores_en_paralelo() {
    let mut input = tray_input(400.0, 40.0);
    input.parallel = 2;
    let sizing = cable_sizing(&input, rebt::VDROP_LIMIT_DEFAULT).unwrap();
    assert_eq!(sizing.section, 70.0);
    assert_eq!(sizing.iz_eff, 464.0);
    assert!(approx_equal(1.118557, sizing.vdrop_pct, 1e-3));
    assert_eq!(sizing.breaker, Some(400));

    // la intensidad admisible escala con el número de conductores
    let simple = assess_sizes(&tray_input(400.0, 40.0), rebt::VDROP_LIMIT_DEFAULT).unwrap();
    let doble = assess_sizes(&input, rebt::VDROP_LIMIT_DEFAULT).unwrap();
    for (uno, dos) in simple.iter().zip(doble.iter()) {
        assert_eq!(dos.iz_eff, 2.0 * uno.iz_eff);
    }
}

#[test]
fn linea_monofasica() {
    let mut input = CableInput::new(20.0, 18.0);
    input.insulation = Insulation::PVC;
    input.phase = PhaseSystem::MONOFASICO;
    input.cos_phi = 0.9;
    let sizing = cable_sizing(&input, rebt::VDROP_LIMIT_DEFAULT).unwrap();
    assert_eq!(sizing.section, 2.5);
    assert_eq!(sizing.iz_eff, 21.0);
    assert!(approx_equal(5.354602, sizing.vdrop_volts, 1e-3));
    assert!(approx_equal(2.328088, sizing.vdrop_pct, 1e-3));
    assert_eq!(sizing.breaker, Some(20));
}

#[test]
fn bucle_de_defecto() {
    // Ze explícita y conductor de protección de sección reducida
    let mut input = tray_input(50.0, 30.0);
    input.ze = Some(0.5);
    input.pe_section = Some(16.0);
    let sizing = cable_sizing(&input, rebt::VDROP_LIMIT_DEFAULT).unwrap();
    assert_eq!(sizing.section, 6.0);
    // zs = 0.5 + (3.69 + 1.38) * 0.03
    assert!(approx_equal(0.6521, sizing.zs, 1e-4));
}

#[test]
fn coste_del_cable() {
    let mut input = tray_input(50.0, 30.0);
    input.unit_cost = Some(1.50);
    let sizing = cable_sizing(&input, rebt::VDROP_LIMIT_DEFAULT).unwrap();
    assert_eq!(sizing.cost, Some(45.0));

    input.parallel = 2;
    let sizing = cable_sizing(&input, rebt::VDROP_LIMIT_DEFAULT).unwrap();
    assert_eq!(sizing.cost, Some(90.0));
}

#[test]
fn monotonia_de_seccion() {
    // a mayor intensidad de cálculo, sección igual o mayor
    let expected = [
        (10.0, 1.5),
        (30.0, 4.0),
        (60.0, 10.0),
        (100.0, 25.0),
        (150.0, 50.0),
        (200.0, 70.0),
        (300.0, 120.0),
        (400.0, 185.0),
        (500.0, 240.0),
    ];
    let mut last = 0.0;
    for &(ib, section) in expected.iter() {
        let sizing = cable_sizing(&tray_input(ib, 50.0), rebt::VDROP_LIMIT_DEFAULT).unwrap();
        assert_eq!(sizing.section, section);
        assert!(sizing.section >= last);
        last = sizing.section;
    }
}

#[test]
fn estudio_de_secciones() {
    let input = tray_input(150.0, 75.0);
    let cases = assess_sizes(&input, rebt::VDROP_LIMIT_DEFAULT).unwrap();
    assert_eq!(cases.len(), 16);
    // la serie se recorre en orden creciente
    for pair in cases.windows(2) {
        assert!(pair[0].section < pair[1].section);
    }
    // la primera sección que cumple ambos criterios es la seleccionada
    let first_ok = cases
        .iter()
        .find(|case| case.ampacity_ok && case.vdrop_ok)
        .unwrap();
    let sizing = cable_sizing(&input, rebt::VDROP_LIMIT_DEFAULT).unwrap();
    assert_eq!(first_ok.section, sizing.section);
}

#[test]
fn determinismo() {
    let mut input = tray_input(150.0, 75.0);
    input.fault = Some(FaultParams::new(10.0, 0.2));
    input.unit_cost = Some(12.0);
    let first = cable_sizing(&input, rebt::VDROP_LIMIT_DEFAULT).unwrap();
    let second = cable_sizing(&input, rebt::VDROP_LIMIT_DEFAULT).unwrap();
    assert_eq!(first, second);
}

#[test]
fn datos_invalidos() {
    let base = tray_input(50.0, 30.0);

    let mut input = base.clone();
    input.ib = 0.0;
    assert!(cable_sizing(&input, rebt::VDROP_LIMIT_DEFAULT).is_err());

    let mut input = base.clone();
    input.cos_phi = 0.0;
    assert!(cable_sizing(&input, rebt::VDROP_LIMIT_DEFAULT).is_err());

    let mut input = base.clone();
    input.k_temp = 1.5;
    assert!(cable_sizing(&input, rebt::VDROP_LIMIT_DEFAULT).is_err());

    // método D sin profundidad de enterramiento
    let mut input = base.clone();
    input.method = InstallMethod::D;
    assert!(cable_sizing(&input, rebt::VDROP_LIMIT_DEFAULT).is_err());

    // profundidad sin método D
    let mut input = base.clone();
    input.burial_depth = Some(BurialDepth::P050);
    assert!(cable_sizing(&input, rebt::VDROP_LIMIT_DEFAULT).is_err());

    let mut input = base.clone();
    input.parallel = 5;
    assert!(cable_sizing(&input, rebt::VDROP_LIMIT_DEFAULT).is_err());

    // límite de caída de tensión no positivo
    assert!(cable_sizing(&base, -1.0).is_err());

    // sección de protección fuera de la serie normalizada
    let mut input = base;
    input.pe_section = Some(7.5);
    match cable_sizing(&input, rebt::VDROP_LIMIT_DEFAULT) {
        Err(CableError::WrongInput(_)) => (),
        other => panic!("WrongInput esperado, obtenido {:?}", other),
    }
}
