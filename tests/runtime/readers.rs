//! Integration tests for the file readers
//!
//! Tests the three input formats together, the way a run reads them.

use prodsys_foundation::{AttributeKind, ErrorKind, Fact, RuleId};
use prodsys_runtime::reader::{parse_configuration, parse_facts, parse_knowledge_base};

const CONFIG: &str = "\
ATRIBUTOS 4
Temperatura NU
Cielo Nom {despejado,nublado}
Alerta Nom {alta,media,baja}
Ventilador Nom {on,off}
OBJETIVO Ventilador
PRIORIDADES-REGLAS 3
1 4 2
";

const KB: &str = "\
Climatizacion de oficinas
3
R1: Si Temperatura > 30 Entonces Alerta = alta
R2: Si Temperatura >= 22 y Cielo = despejado Entonces Alerta = media
R3: Si Alerta = alta o Alerta = media Entonces Ventilador = on
";

#[test]
fn configuration_and_knowledge_base_agree() {
    let config = parse_configuration(CONFIG).unwrap().build().unwrap();
    assert_eq!(config.kind_of("Temperatura"), Some(AttributeKind::Numeric));
    assert_eq!(config.attribute("Alerta").unwrap().labels.len(), 3);

    let kb = parse_knowledge_base(KB, &config).unwrap();
    assert_eq!(kb.domain(), "Climatizacion de oficinas");
    assert_eq!(kb.len(), 3);
    assert_eq!(kb.get(RuleId(1)).unwrap().priority, 4);
    assert_eq!(kb.get(RuleId(2)).unwrap().conditions.len(), 2);
    assert_eq!(
        kb.get(RuleId(0)).unwrap().consequent,
        Fact::new("Alerta", "alta")
    );
}

#[test]
fn facts_in_file_order() {
    let facts = parse_facts("2\nTemperatura = 25\nCielo = despejado\n").unwrap();
    assert_eq!(facts[0], Fact::new("Temperatura", "25"));
    assert_eq!(facts[1], Fact::new("Cielo", "despejado"));
}

#[test]
fn knowledge_base_needs_its_configuration() {
    let config = parse_configuration("ATRIBUTOS 1\nTemperatura NU\nOBJETIVO Alerta\nPRIORIDADES-REGLAS 3\n1 4 2\n")
        .unwrap()
        .build()
        .unwrap();
    let err = parse_knowledge_base(KB, &config).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownAttribute { .. }));
}

#[test]
fn rule_without_si_points_at_the_token() {
    let config = parse_configuration(CONFIG).unwrap().build().unwrap();
    let kb = KB.replace("R2: Si", "R2: Cuando");
    let err = parse_knowledge_base(&kb, &config).unwrap_err();
    match err.kind {
        ErrorKind::ParseError { line, column, message } => {
            assert_eq!((line, column), (4, 5));
            assert!(message.contains("Cuando"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
