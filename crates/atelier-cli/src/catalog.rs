//! `catalog` subcommands: load the seed catalog and print filtered views.

use anyhow::{bail, Context};
use clap::Subcommand;

use atelier_catalog::{apply, published_only, FilterCriteria, SortDirection, SortField, TypeFilter};
use atelier_core::{AppConfig, CreationType};

#[derive(Debug, Subcommand)]
pub enum CatalogCommands {
    /// List creations matching the given criteria.
    List {
        /// Free-text search over title, notes, rights, and tags.
        #[arg(long)]
        search: Option<String>,
        /// Category filter: image, text, music, video, software, or "all".
        #[arg(long = "type")]
        kind: Option<String>,
        /// Substring match against the creator.
        #[arg(long)]
        creator: Option<String>,
        /// Substring match against any tag.
        #[arg(long)]
        tag: Option<String>,
        /// Sort key: title, dateCreated, creator, or a raw property name.
        #[arg(long)]
        sort: Option<String>,
        /// Sort direction: asc or desc.
        #[arg(long)]
        direction: Option<String>,
        /// Agency view: published creations only.
        #[arg(long)]
        agency: bool,
    },
}

pub fn run(config: &AppConfig, command: CatalogCommands) -> anyhow::Result<()> {
    match command {
        CatalogCommands::List {
            search,
            kind,
            creator,
            tag,
            sort,
            direction,
            agency,
        } => {
            let catalog = atelier_core::load_catalog(&config.catalog_path)
                .with_context(|| format!("loading catalog {}", config.catalog_path.display()))?;
            tracing::debug!(creations = catalog.creations.len(), "catalog loaded");

            let criteria = build_criteria(search, kind, creator, tag, sort, direction.as_deref())?;

            let snapshot = if agency {
                published_only(&catalog.creations)
            } else {
                catalog.creations
            };
            let view = apply(&snapshot, &criteria);

            for creation in &view {
                println!(
                    "{}  [{:9}] {:9}  {}  {}",
                    creation.id,
                    creation.kind.as_deref().unwrap_or("-"),
                    creation.status.to_string(),
                    creation.date_created.as_deref().unwrap_or("-"),
                    creation.title.as_deref().unwrap_or("(untitled)"),
                );
            }
            println!("{} of {} creations", view.len(), snapshot.len());
            Ok(())
        }
    }
}

fn build_criteria(
    search: Option<String>,
    kind: Option<String>,
    creator: Option<String>,
    tag: Option<String>,
    sort: Option<String>,
    direction: Option<&str>,
) -> anyhow::Result<FilterCriteria> {
    // The engine tolerates arbitrary category strings, but the UI only
    // offers the known tabs, so reject typos here.
    if let Some(kind) = kind.as_deref() {
        if !kind.eq_ignore_ascii_case("all") && CreationType::parse(kind).is_none() {
            bail!(
                "unknown type '{kind}'; expected one of: all, {}",
                CreationType::ALL.map(|t| t.to_string()).join(", ")
            );
        }
    }

    let sort_direction = match direction {
        None => SortDirection::default(),
        Some(d) if d.eq_ignore_ascii_case("asc") => SortDirection::Asc,
        Some(d) if d.eq_ignore_ascii_case("desc") => SortDirection::Desc,
        Some(other) => bail!("invalid sort direction '{other}'; expected asc or desc"),
    };

    Ok(FilterCriteria {
        search_query: search,
        type_filter: kind.as_deref().map_or(TypeFilter::All, TypeFilter::parse),
        creator_filter: creator,
        tag_filter: tag,
        sort_field: sort.as_deref().map_or_else(SortField::default, SortField::parse),
        sort_direction,
    })
}
