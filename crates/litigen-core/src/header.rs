use chrono::NaiveDate;

use crate::assets::RegionTable;
use crate::errors::GenerationError;
use crate::model::OpenHeader;
use crate::number::CaseNumber;
use crate::sampler::Sampler;

const CASE_CLASSES: [&str; 3] = [
    "Procedimento Comum",
    "Execução Extrajudicial",
    "Cumprimento de Sentença",
];

/// Builds the descriptive header of an open case.
///
/// The venue phrases are flavored by the issuing court's jurisdiction: labor
/// and federal circuits get fixed labels, state courts the state's display
/// name. Each optional field is drawn independently.
pub fn header(
    sampler: &mut Sampler,
    regions: &RegionTable,
    number: &CaseNumber,
    instance: u32,
    today: NaiveDate,
) -> Result<OpenHeader, GenerationError> {
    let jurisdiction = jurisdiction_label(regions, &number.court)?;

    let classe = (*sampler.pick(&CASE_CLASSES)).to_string();
    let assunto = sampler.chance(50).then(|| sampler.sentence());
    let foro = sampler.chance(50).then(|| format!("Foro {jurisdiction}"));
    let area = sampler.chance(50).then(|| "Cível".to_string());

    // Three-way pick: a numbered branch, a district, or neither.
    let (vara, comarca) = match sampler.int(0, 2) {
        0 => (
            Some(format!("{}a Vara {jurisdiction}", sampler.int(1, 9))),
            None,
        ),
        1 => (None, Some(format!("Comarca {jurisdiction}"))),
        _ => (None, None),
    };

    let url_processo = sampler.chance(50).then(|| sampler.document_url());
    let juiz = sampler.chance(50).then(|| sampler.full_name());
    let distribuicao = sampler.chance(50).then(|| {
        let start = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or_default();
        sampler.date_between(start, today).format("%d/%m/%Y").to_string()
    });
    let valor_causa = sampler
        .chance(50)
        .then(|| format!("R$ {},00", sampler.int(1000, 1_000_000)));

    Ok(OpenHeader {
        numero_processo: number.complete.clone(),
        instancia: instance,
        classe,
        assunto,
        foro,
        area,
        vara,
        comarca,
        url_processo,
        juiz,
        distribuicao,
        valor_causa,
    })
}

/// Resolves the jurisdiction label shown in venue phrases.
fn jurisdiction_label(regions: &RegionTable, court: &str) -> Result<String, GenerationError> {
    if court.starts_with("TRT") {
        return Ok("Trabalhista".to_string());
    }
    if court.starts_with("TRF") {
        return Ok("Federal".to_string());
    }
    let abbreviation = court.get(2..).unwrap_or_default();
    regions
        .name(abbreviation)
        .map(str::to_string)
        .ok_or_else(|| {
            GenerationError::Asset(format!("region table has no entry for '{abbreviation}'"))
        })
}
