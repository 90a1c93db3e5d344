use chrono::{Local, NaiveDate};
use log::info;
use reqwest::blocking::Client;
use std::thread;
use std::time::Duration;

use crate::cli::CliArgs;
use crate::error::DumpResult;
use crate::{fetch, store};

pub const NATION_DUMP_URL: &str = "https://www.nationstates.net/pages/nations.xml.gz";
pub const REGION_DUMP_URL: &str = "https://www.nationstates.net/pages/regions.xml.gz";

// Courtesy pause between consecutive downloads, per the dump API usage policy.
const INTER_DUMP_PAUSE: Duration = Duration::from_secs(5);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DumpKind {
    Nations,
    Regions,
}

impl DumpKind {
    pub fn url(self) -> &'static str {
        match self {
            DumpKind::Nations => NATION_DUMP_URL,
            DumpKind::Regions => REGION_DUMP_URL,
        }
    }

    /// File name stem of the dump.
    pub fn name(self) -> &'static str {
        match self {
            DumpKind::Nations => "nations",
            DumpKind::Regions => "regions",
        }
    }

    fn label(self) -> &'static str {
        match self {
            DumpKind::Nations => "nation",
            DumpKind::Regions => "region",
        }
    }
}

/// Date-stamped output file name for one dump, e.g. `nations_2024_03_15.xml`.
pub fn dump_filename(kind: DumpKind, date: NaiveDate) -> String {
    format!("{}_{}.xml", kind.name(), date.format("%Y_%m_%d"))
}

/// Downloads the requested dumps in fixed order, nations before regions.
/// The first failure aborts the run; files already written stay on disk.
pub fn run(args: &CliArgs) -> DumpResult<()> {
    let client = Client::new();
    let today = Local::now().date_naive();

    let dumps = [
        (DumpKind::Nations, args.nations, &args.out_dir_nations),
        (DumpKind::Regions, args.regions, &args.out_dir_regions),
    ];

    let mut downloaded = false;
    for (kind, requested, out_dir) in dumps {
        if !requested {
            continue;
        }

        if downloaded {
            thread::sleep(INTER_DUMP_PAUSE);
        }

        info!("Downloading {} dump...", kind.label());
        let path = out_dir.join(dump_filename(kind, today));

        if args.dry_run {
            store::write_placeholder(&path)?;
        } else {
            let body = fetch::fetch_dump(&client, kind.url(), &args.user_agent)?;
            if args.decompress {
                store::write_decompressed(body, &path)?;
            } else {
                store::write_raw(body, &path)?;
            }
            downloaded = true;
        }
    }

    Ok(())
}
