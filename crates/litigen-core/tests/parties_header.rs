use chrono::NaiveDate;

use litigen_core::Sampler;
use litigen_core::assets::region_table;
use litigen_core::header::header;
use litigen_core::number::CaseNumber;
use litigen_core::parties::{lawyer, party};

fn number_for(court: &str) -> CaseNumber {
    CaseNumber {
        complete: "1234567-58.2020.8.26.0001".to_string(),
        sequence: "1234567".to_string(),
        check: "58".to_string(),
        year: 2020,
        segment: "8".to_string(),
        region: "26".to_string(),
        origin: "0001".to_string(),
        court: court.to_string(),
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap_or_default()
}

#[test]
fn lawyers_are_people_with_a_bar_document() {
    let regions = region_table().expect("region table is present");
    for seed in 0..100 {
        let mut sampler = Sampler::with_seed(seed);
        let part = lawyer(&mut sampler, regions);

        assert!(!part.nome.is_empty());
        let documento = part.documento.expect("lawyers always carry a document");
        assert_eq!(documento.len(), 8);
        let (state, registration) = documento.split_at(2);
        assert!(regions.name(state).is_some(), "unknown state {state}");
        assert!(registration.chars().all(|c| c.is_ascii_digit()));
        assert!(!registration.starts_with('0'));
    }
}

#[test]
fn absent_parties_and_documents_are_possible_but_names_never_are() {
    let mut seen_absent = false;
    let mut seen_undocumented = false;

    for seed in 0..200 {
        let mut sampler = Sampler::with_seed(seed);
        match party(&mut sampler) {
            None => seen_absent = true,
            Some(part) => {
                assert!(!part.nome.is_empty());
                if part.documento.is_none() {
                    seen_undocumented = true;
                }
            }
        }
    }

    assert!(seen_absent, "no absent party in 200 seeds");
    assert!(seen_undocumented, "no undocumented party in 200 seeds");
}

#[test]
fn undocumented_parties_serialize_without_the_document_key() {
    for seed in 0..200 {
        let mut sampler = Sampler::with_seed(seed);
        let Some(part) = party(&mut sampler) else {
            continue;
        };
        let value = serde_json::to_value(&part).expect("serializable");
        let object = value.as_object().expect("party is an object");
        assert!(object.contains_key("nome"));
        assert_eq!(object.contains_key("documento"), part.documento.is_some());
    }
}

#[test]
fn labor_and_federal_courts_flavor_the_venue_phrases() {
    let regions = region_table().expect("region table is present");

    for (court, label) in [("TRT15", "Trabalhista"), ("TRF03", "Federal"), ("TJSP", "São Paulo")] {
        let number = number_for(court);
        let mut seen_venue = false;
        for seed in 0..60 {
            let mut sampler = Sampler::with_seed(seed);
            let open = header(&mut sampler, regions, &number, 1, today()).expect("header builds");

            if let Some(foro) = &open.foro {
                assert_eq!(foro, &format!("Foro {label}"));
                seen_venue = true;
            }
            if let Some(vara) = &open.vara {
                assert!(vara.ends_with(&format!("Vara {label}")), "got {vara}");
                seen_venue = true;
            }
            if let Some(comarca) = &open.comarca {
                assert_eq!(comarca, &format!("Comarca {label}"));
                seen_venue = true;
            }
        }
        assert!(seen_venue, "no venue phrase drawn for {court} in 60 seeds");
    }
}

#[test]
fn headers_keep_optional_fields_optional_and_well_formed() {
    let regions = region_table().expect("region table is present");
    let number = number_for("TJMG");

    for seed in 0..60 {
        let mut sampler = Sampler::with_seed(seed);
        let open = header(&mut sampler, regions, &number, 1, today()).expect("header builds");

        assert_eq!(open.numero_processo, number.complete);
        assert!(
            [
                "Procedimento Comum",
                "Execução Extrajudicial",
                "Cumprimento de Sentença"
            ]
            .contains(&open.classe.as_str())
        );
        assert!(open.vara.is_none() || open.comarca.is_none());

        if let Some(valor) = &open.valor_causa {
            let amount = valor
                .strip_prefix("R$ ")
                .and_then(|rest| rest.strip_suffix(",00"))
                .expect("currency shape");
            let amount: u64 = amount.parse().expect("numeric amount");
            assert!((1000..=1_000_000).contains(&amount));
        }
        if let Some(distribuicao) = &open.distribuicao {
            NaiveDate::parse_from_str(distribuicao, "%d/%m/%Y").expect("dd/mm/yyyy date");
        }
        if let Some(area) = &open.area {
            assert_eq!(area, "Cível");
        }
    }
}
