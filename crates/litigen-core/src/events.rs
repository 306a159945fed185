//! Generators for the dated event lists carried by a case.
//!
//! Each generator produces exactly the number of records the composer asked
//! for, dated uniformly inside the case's historical window.

use chrono::NaiveDate;

use crate::model::{Appendix, Hearing, Petition, Progress, Publication};
use crate::sampler::Sampler;

/// Hearing status text is cut to this many characters.
const HEARING_STATUS_LIMIT: usize = 20;

/// Historical window events are dated in: January 1 of the case's filing
/// year through the processing date.
#[derive(Debug, Clone, Copy)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn from_year(min_year: i32, today: NaiveDate) -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(min_year, 1, 1).unwrap_or_default(),
            end: today,
        }
    }
}

/// Strings interpolated into every publication's composed text.
#[derive(Debug, Clone, Copy)]
pub struct PublicationContext<'a> {
    pub lawsuit_number: &'a str,
    pub law_class: &'a str,
    pub part_names: &'a str,
    pub lawyer_names: &'a str,
}

pub fn progress_entries(
    sampler: &mut Sampler,
    window: &DateWindow,
    total: usize,
) -> Vec<Progress> {
    (0..total)
        .map(|_| {
            let sentences = sampler.int(1, 50) as usize;
            Progress {
                data_movimentacao: sampler.date_between(window.start, window.end),
                movimentacao: sampler.paragraph(sentences),
                url_documento: sampler.chance(50).then(|| sampler.document_url()),
            }
        })
        .collect()
}

pub fn publications(
    sampler: &mut Sampler,
    window: &DateWindow,
    context: &PublicationContext<'_>,
    total: usize,
) -> Vec<Publication> {
    (0..total)
        .map(|_| {
            let sentences = sampler.int(1, 50) as usize;
            let body = sampler.paragraph(sentences);
            let publicacao = format!(
                "{} - PROCESSO {} - {} - {} - adv: {}",
                context.law_class.to_uppercase(),
                context.lawsuit_number,
                context.part_names,
                body,
                context.lawyer_names,
            );
            Publication {
                data_publicacao: sampler.date_between(window.start, window.end),
                publicacao,
                url_documento: sampler.chance(50).then(|| sampler.document_url()),
            }
        })
        .collect()
}

pub fn appendices(sampler: &mut Sampler, window: &DateWindow, total: usize) -> Vec<Appendix> {
    (0..total)
        .map(|_| {
            let sentences = sampler.int(1, 5) as usize;
            Appendix {
                data_documento: sampler.date_between(window.start, window.end),
                descricao: sampler.paragraph(sentences),
                url_documento: sampler.document_url(),
            }
        })
        .collect()
}

pub fn petitions(sampler: &mut Sampler, window: &DateWindow, total: usize) -> Vec<Petition> {
    (0..total)
        .map(|_| Petition {
            data_peticao: sampler.date_between(window.start, window.end),
            tipo: sampler.sentence(),
        })
        .collect()
}

pub fn hearings(sampler: &mut Sampler, window: &DateWindow, total: usize) -> Vec<Hearing> {
    (0..total)
        .map(|_| {
            let situacao: String = sampler
                .sentence()
                .chars()
                .take(HEARING_STATUS_LIMIT)
                .collect();
            Hearing {
                data_audiencia: sampler.date_between(window.start, window.end),
                audiencia: sampler.sentence(),
                situacao,
                qtd_pessoas: sampler.int(1, 10) as u32,
            }
        })
        .collect()
}
