use crate::errors::GenerationError;
use crate::sampler::Sampler;

/// Court code returned for segment/region pairs with no dedicated entry.
const DEFAULT_COURT: &str = "TJSP";

/// State court codes for segment 8, indexed by region code 01 through 27.
/// Region 28 is a valid draw but has no state court of its own; it falls
/// back to [`DEFAULT_COURT`].
const STATE_COURTS: [&str; 27] = [
    "TJAC", "TJAL", "TJAP", "TJAM", "TJBA", "TJCE", "TJDF", "TJES", "TJGO", "TJMA", "TJMT",
    "TJMS", "TJMG", "TJPA", "TJPB", "TJPR", "TJPE", "TJPI", "TJRJ", "TJRN", "TJRS", "TJRO",
    "TJRR", "TJSC", "TJSE", "TJSP", "TJTO",
];

const SEGMENTS: [&str; 3] = ["4", "5", "8"];

/// A fabricated case number, kept together with the fields it was assembled
/// from and the issuing court resolved for them.
///
/// Mask: `sequence-check.year.segment.region.origin`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseNumber {
    pub complete: String,
    pub sequence: String,
    pub check: String,
    pub year: i32,
    pub segment: String,
    pub region: String,
    pub origin: String,
    pub court: String,
}

/// Mod-97 verification digits over the concatenated number segments.
///
/// The five segments are concatenated in mask order, read as one large
/// integer `N`, and the result is `98 - ((N * 100) % 97) % 97`, left-padded
/// to two digits. Deterministic; fails only on non-numeric input.
pub fn verification_digits(
    sequence: &str,
    year: &str,
    segment: &str,
    region: &str,
    origin: &str,
) -> Result<String, GenerationError> {
    let mut remainder: u64 = 0;
    for part in [sequence, year, segment, region, origin] {
        ensure_numeric(part)?;
        for byte in part.bytes() {
            remainder = (remainder * 10 + u64::from(byte - b'0')) % 97;
        }
    }
    let check = 98 - ((remainder * 100) % 97) % 97;
    Ok(format!("{check:02}"))
}

fn ensure_numeric(part: &str) -> Result<(), GenerationError> {
    if part.is_empty() || !part.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(GenerationError::InvalidSegment(part.to_string()));
    }
    Ok(())
}

/// Draws a complete case number: 7-digit sequence, year up to `current_year`,
/// segment from {4, 5, 8}, region in [01, 28], 4-digit origin, plus the
/// verification digits and the issuing court.
pub fn case_number(
    sampler: &mut Sampler,
    current_year: i32,
) -> Result<CaseNumber, GenerationError> {
    let sequence = sampler.digits(7);
    let year = sampler.int(1970, i64::from(current_year)) as i32;
    let segment = (*sampler.pick(&SEGMENTS)).to_string();
    let region = format!("{:02}", sampler.int(1, 28));
    let origin = sampler.digits(4);

    let year_text = year.to_string();
    let check = verification_digits(&sequence, &year_text, &segment, &region, &origin)?;
    let complete = format!("{sequence}-{check}.{year_text}.{segment}.{region}.{origin}");
    let court = dispatch_court(&segment, &region);

    Ok(CaseNumber {
        complete,
        sequence,
        check,
        year,
        segment,
        region,
        origin,
        court,
    })
}

/// Resolves the issuing court code for a segment/region pair.
///
/// Segment 8 maps to the per-state courts, segments 4 and 5 to the federal
/// and labor circuits parameterized by region. Anything unmapped, including
/// segment 8 region 28, resolves to [`DEFAULT_COURT`] so the result is never
/// absent.
pub fn dispatch_court(segment: &str, region: &str) -> String {
    match segment {
        "8" => region
            .parse::<usize>()
            .ok()
            .filter(|value| (1..=STATE_COURTS.len()).contains(value))
            .map(|value| STATE_COURTS[value - 1].to_string())
            .unwrap_or_else(|| DEFAULT_COURT.to_string()),
        "4" => format!("TRF{region}"),
        "5" => format!("TRT{region}"),
        _ => DEFAULT_COURT.to_string(),
    }
}
