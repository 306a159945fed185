use chrono::NaiveDate;

use litigen_core::Sampler;
use litigen_core::classification::classify;
use litigen_core::model::Publication;

fn publication(text: &str) -> Publication {
    Publication {
        data_publicacao: NaiveDate::from_ymd_opt(2023, 3, 10).unwrap_or_default(),
        publicacao: text.to_string(),
        url_documento: None,
    }
}

#[test]
fn spans_stay_inside_the_classified_text() {
    let events: Vec<Publication> = (0..25)
        .map(|index| publication(&format!("Sentença publicada no diário oficial nº {index}.")))
        .collect();

    let mut seen_any = false;
    for seed in 0..30 {
        let mut sampler = Sampler::with_seed(seed);
        for classification in classify(&mut sampler, &events, "publicacao") {
            seen_any = true;
            let chars: Vec<char> = classification.evento_obj.publicacao.chars().collect();
            let span = &classification.match_span;
            assert!(span.inicio <= span.fim);
            assert!(span.fim <= chars.len());
            let expected: String = chars[span.inicio..span.fim].iter().collect();
            assert_eq!(span.termo, expected);
        }
    }
    assert!(seen_any, "no classification drawn in 30 seeds");
}

/// Texts shorter than the ten-character headroom clamp the start offset
/// instead of producing an invalid range.
#[test]
fn short_and_accented_texts_never_break_the_span() {
    let events: Vec<Publication> = (0..25).map(|_| publication("ação nº 7")).collect();

    for seed in 0..30 {
        let mut sampler = Sampler::with_seed(seed);
        for classification in classify(&mut sampler, &events, "publicacao") {
            let span = &classification.match_span;
            assert_eq!(span.inicio, 0);
            assert!(span.fim <= "ação nº 7".chars().count());
        }
    }
}

#[test]
fn classification_count_is_bounded_by_a_fifth_of_the_events() {
    let thirteen: Vec<Publication> = (0..13)
        .map(|_| publication("Intimação das partes para audiência de instrução."))
        .collect();
    let three: Vec<Publication> = thirteen[..3].to_vec();

    for seed in 0..30 {
        let mut sampler = Sampler::with_seed(seed);
        assert!(classify(&mut sampler, &thirteen, "publicacao").len() <= 3);
        assert!(classify(&mut sampler, &three, "publicacao").len() <= 1);
    }
}

#[test]
fn empty_event_lists_yield_no_classifications() {
    let mut sampler = Sampler::with_seed(1);
    assert!(classify(&mut sampler, &[], "publicacao").is_empty());
}

#[test]
fn classifications_carry_the_event_type_and_a_known_label() {
    let events: Vec<Publication> = (0..25)
        .map(|_| publication("Publicado acórdão da segunda turma recursal."))
        .collect();

    for seed in 0..30 {
        let mut sampler = Sampler::with_seed(seed);
        for classification in classify(&mut sampler, &events, "publicacao") {
            assert_eq!(classification.tipo_evento, "publicacao");
            assert!(classification.ativo);
            assert!(
                [
                    "classificacao_um",
                    "classificacao_dois",
                    "classificacao_cinco",
                    "classificacao_quatro"
                ]
                .contains(&classification.classificacao.as_str())
            );
        }
    }
}
