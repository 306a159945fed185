//! Composition layer: assembles lawsuits and folders from the per-field
//! generators and drives batch production.

use chrono::{Datelike, NaiveDate, Utc};
use tracing::{debug, info};

use crate::assets::{RegionTable, region_table};
use crate::classification::classify;
use crate::errors::GenerationError;
use crate::events::{
    DateWindow, PublicationContext, appendices, hearings, petitions, progress_entries,
    publications,
};
use crate::header::header;
use crate::model::{
    Appendix, Classification, Folder, Header, Hearing, Lawsuit, OpenHeader, Party, Petition,
    Progress, Publication, SECRECY_NOTICE, SealedHeader, Status,
};
use crate::number::{CaseNumber, case_number};
use crate::parties::{lawyer, party};
use crate::sampler::Sampler;

/// Share of folders placed under judicial secrecy, in percent.
const SECRECY_CHANCE: u32 = 20;

/// Relationship between a lawsuit and the folder that holds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseRole {
    Main,
    Appeal,
    Recourse,
    Attached,
    Dependent,
}

/// Options accepted by [`LawsuitFactory::with_options`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FactoryOptions {
    /// Seed for the randomness source; fresh OS entropy when absent.
    pub seed: Option<u64>,
    /// Processing date used as the upper bound for generated dates; defaults
    /// to the current UTC date. Pin it together with a seed to make output
    /// byte-reproducible.
    pub today: Option<NaiveDate>,
}

/// Generates complete fictitious lawsuits and folders.
///
/// Construction loads the region table, so a missing or broken asset file
/// fails here rather than midway through a batch.
#[derive(Debug, Clone)]
pub struct LawsuitFactory {
    sampler: Sampler,
    regions: &'static RegionTable,
    today: NaiveDate,
}

#[derive(Default)]
struct CaseLists {
    petitions: Vec<Petition>,
    hearings: Vec<Hearing>,
    progress: Vec<Progress>,
    appendices: Vec<Appendix>,
    publications: Vec<Publication>,
    classifications: Vec<Classification>,
    active: Vec<Party>,
    active_lawyers: Vec<Party>,
    passive: Vec<Party>,
    passive_lawyers: Vec<Party>,
    others: Vec<Party>,
}

impl LawsuitFactory {
    pub fn new() -> Result<Self, GenerationError> {
        Self::with_options(FactoryOptions::default())
    }

    pub fn with_options(options: FactoryOptions) -> Result<Self, GenerationError> {
        let regions = region_table()?;
        let sampler = match options.seed {
            Some(seed) => Sampler::with_seed(seed),
            None => Sampler::new(),
        };
        Ok(Self {
            sampler,
            regions,
            today: options.today.unwrap_or_else(|| Utc::now().date_naive()),
        })
    }

    /// Draws a lifecycle status; one draw in four leaves it unset.
    pub fn status(&mut self) -> Option<Status> {
        match self.sampler.int(0, 3) {
            0 => Some(Status::Ativo),
            1 => Some(Status::Arquivado),
            2 => Some(Status::Suspenso),
            _ => None,
        }
    }

    /// Generates one complete lawsuit.
    ///
    /// Secret cases keep their case number and status but carry a sealed
    /// header and empty participant and event lists.
    pub fn lawsuit(
        &mut self,
        instance: u32,
        role: CaseRole,
        is_secret: bool,
    ) -> Result<Lawsuit, GenerationError> {
        let number = case_number(&mut self.sampler, self.today.year())?;
        let status = self.status();

        let (case_header, lists) = if is_secret {
            let sealed = SealedHeader {
                secret: SECRECY_NOTICE.to_string(),
            };
            (Header::Sealed(sealed), CaseLists::default())
        } else {
            let open = header(&mut self.sampler, self.regions, &number, instance, self.today)?;
            let lists = self.case_lists(&number, &open);
            (Header::Open(open), lists)
        };

        debug!(number = %number.complete, secret = is_secret, "lawsuit generated");

        Ok(Lawsuit {
            lawsuit_number: number.complete,
            year: number.year.to_string(),
            segment: number.segment,
            region: number.region,
            origin: number.origin,
            court_house: number.court,
            status,
            instance,
            is_secret,
            header: case_header,
            is_main: role == CaseRole::Main,
            is_appeal: role == CaseRole::Appeal,
            is_recourse: role == CaseRole::Recourse,
            is_attached: role == CaseRole::Attached,
            is_dependent: role == CaseRole::Dependent,
            petition_list: lists.petitions,
            audition_list: lists.hearings,
            progress_list: lists.progress,
            appendix_list: lists.appendices,
            publication_list: lists.publications,
            part_active_list: lists.active,
            part_active_lawyer_list: lists.active_lawyers,
            part_passive_list: lists.passive,
            part_passive_lawyer_list: lists.passive_lawyers,
            part_other_list: lists.others,
            classification_list: lists.classifications,
        })
    }

    /// Generates one folder: a main lawsuit plus, unless it is secret, its
    /// related appeals, attachments, dependents and recourses.
    pub fn folder(&mut self) -> Result<Folder, GenerationError> {
        let is_secret = self.sampler.chance(SECRECY_CHANCE);
        let main = self.lawsuit(1, CaseRole::Main, is_secret)?;
        let main_number = main.lawsuit_number.clone();
        let court_house = main.court_house.clone();

        let (book_name, appeals, attached, dependents, recourses) = if is_secret {
            (
                format!("{main_number}: SEGREDO DE JUSTIÇA"),
                Vec::new(),
                Vec::new(),
                Vec::new(),
                Vec::new(),
            )
        } else {
            (
                format!("{main_number}: PROCESSO GERADO"),
                self.related(1, CaseRole::Appeal)?,
                self.related(1, CaseRole::Attached)?,
                self.related(1, CaseRole::Dependent)?,
                self.related(2, CaseRole::Recourse)?,
            )
        };

        info!(number = %main_number, secret = is_secret, "folder generated");

        Ok(Folder {
            main_number,
            book_name,
            court_house,
            main,
            appeals,
            recourses,
            attached,
            dependents,
        })
    }

    /// Lazy stream of `total` independently generated folders.
    pub fn folders(self, total: usize) -> Folders {
        Folders {
            factory: self,
            remaining: total,
        }
    }

    fn case_lists(&mut self, number: &CaseNumber, case_header: &OpenHeader) -> CaseLists {
        let active = self.parties();
        let active_lawyers = self.lawyers();
        let passive = self.parties();
        let passive_lawyers = self.lawyers();
        let others = self.parties();

        let part_names = joined_names(&active, &passive);
        let lawyer_names = joined_names(&active_lawyers, &passive_lawyers);

        let window = DateWindow::from_year(number.year, self.today);
        let context = PublicationContext {
            lawsuit_number: &number.complete,
            law_class: &case_header.classe,
            part_names: &part_names,
            lawyer_names: &lawyer_names,
        };

        let total = self.sampler.int(0, 100) as usize;
        let publication_list = publications(&mut self.sampler, &window, &context, total);
        let total = self.sampler.int(0, 100) as usize;
        let progress = progress_entries(&mut self.sampler, &window, total);
        let total = self.sampler.int(0, 50) as usize;
        let appendix_list = appendices(&mut self.sampler, &window, total);
        let total = self.sampler.int(0, 30) as usize;
        let petition_list = petitions(&mut self.sampler, &window, total);
        let total = self.sampler.int(0, 30) as usize;
        let hearing_list = hearings(&mut self.sampler, &window, total);

        let classifications = classify(&mut self.sampler, &publication_list, "publicacao");

        CaseLists {
            petitions: petition_list,
            hearings: hearing_list,
            progress,
            appendices: appendix_list,
            publications: publication_list,
            classifications,
            active,
            active_lawyers,
            passive,
            passive_lawyers,
            others,
        }
    }

    /// Up to five participants, with absent draws filtered out.
    fn parties(&mut self) -> Vec<Party> {
        let total = self.sampler.int(0, 5);
        (0..total)
            .filter_map(|_| party(&mut self.sampler))
            .collect()
    }

    fn lawyers(&mut self) -> Vec<Party> {
        let total = self.sampler.int(0, 5);
        (0..total)
            .map(|_| lawyer(&mut self.sampler, self.regions))
            .collect()
    }

    fn related(&mut self, instance: u32, role: CaseRole) -> Result<Vec<Lawsuit>, GenerationError> {
        let total = self.sampler.int(0, 3);
        (0..total)
            .map(|_| self.lawsuit(instance, role, false))
            .collect()
    }
}

fn joined_names(first: &[Party], second: &[Party]) -> String {
    first
        .iter()
        .chain(second)
        .map(|part| part.nome.as_str())
        .collect::<Vec<_>>()
        .join(" - ")
}

/// Lazy, finite stream of generated folders.
///
/// Consuming it advances the factory's randomness source, so the stream is
/// not restartable; dropping it early simply skips the remaining folders.
#[derive(Debug)]
pub struct Folders {
    factory: LawsuitFactory,
    remaining: usize,
}

impl Iterator for Folders {
    type Item = Result<Folder, GenerationError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.factory.folder())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Folders {}
