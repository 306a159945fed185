use crate::model::{Classification, MatchSpan, Publication};
use crate::sampler::Sampler;

const LABELS: [&str; 4] = [
    "classificacao_um",
    "classificacao_dois",
    "classificacao_cinco",
    "classificacao_quatro",
];

/// Tags a random subset of the events, at most a fifth of them, each with a
/// label and a character span into that event's text.
///
/// Spans are computed over characters, never bytes, so accented text cannot
/// split a UTF-8 boundary. The start offset keeps ten characters of headroom
/// when the text is long enough; shorter texts clamp the range instead of
/// failing, so `0 <= inicio <= fim <= len` always holds.
pub fn classify(
    sampler: &mut Sampler,
    events: &[Publication],
    event_type: &str,
) -> Vec<Classification> {
    let ceiling = (events.len() as f64 * 20.0 / 100.0).round() as usize;
    let total = sampler.int(0, ceiling as i64) as usize;
    (0..total)
        .map(|_| {
            let event = sampler.pick(events);
            let chars: Vec<char> = event.publicacao.chars().collect();
            let start = sampler.int(0, chars.len().saturating_sub(10) as i64) as usize;
            let end = sampler.int(start as i64, chars.len() as i64) as usize;
            let termo: String = chars[start..end].iter().collect();
            Classification {
                evento_obj: event.clone(),
                tipo_evento: event_type.to_string(),
                classificacao: (*sampler.pick(&LABELS)).to_string(),
                ativo: true,
                match_span: MatchSpan {
                    inicio: start,
                    fim: end,
                    termo,
                },
            }
        })
        .collect()
}
