//! Search command - find photos by date and tags

use crate::PhotosError;
use crate::cli::SearchArgs;
use crate::library::Library;
use crate::output;
use crate::search::{DateFilter, SearchCriteria, SearchOutcome, SearchScope};

type Result<T> = std::result::Result<T, PhotosError>;

/// Build search criteria from command-line arguments
///
/// `--person` and `--location` become rows of their own ahead of any `-t`
/// rows.
///
/// # Errors
/// Returns `PhotosError::SearchError` for an incomplete tag row.
pub fn criteria_from_args(args: &SearchArgs) -> Result<SearchCriteria> {
    let date = match (args.on, args.from, args.to) {
        (Some(day), _, _) => DateFilter::Single(day),
        (None, None, None) => DateFilter::None,
        (None, start, end) => DateFilter::Range { start, end },
    };

    let mut rows = Vec::new();
    if let Some(person) = &args.person {
        rows.push(("person".to_string(), person.clone()));
    }
    if let Some(location) = &args.location {
        rows.push(("location".to_string(), location.clone()));
    }
    rows.extend(args.tags.iter().cloned());

    Ok(SearchCriteria::from_rows(date, &rows)?)
}

/// Execute the search command
///
/// # Errors
/// Returns an error if the criteria are empty or incomplete, the pool is
/// empty, or saving the results as an album fails.
pub fn execute(
    library: &mut Library,
    username: &str,
    args: &SearchArgs,
    quiet: bool,
) -> Result<()> {
    let criteria = criteria_from_args(args)?;
    let scope = args
        .album
        .clone()
        .map_or(SearchScope::AllAlbums, SearchScope::Album);

    let outcome = library.search(username, &scope, &criteria)?;
    if let Some(message) = outcome.message() {
        if !quiet {
            println!("{}", output::notice(&message));
        }
        return Ok(());
    }

    for photo in library.photos.resolve(outcome.keys()) {
        println!("{}", output::photo_line(photo, quiet));
    }

    if let Some(name) = &args.save_as {
        let SearchOutcome::Found(keys) = outcome else {
            return Ok(());
        };
        library.create_album_from(username, name, &keys)?;
        if !quiet {
            let message = format!("Saved {} photo(s) to album {name}", keys.len());
            println!("{}", output::success(&message));
        }
    }
    Ok(())
}
