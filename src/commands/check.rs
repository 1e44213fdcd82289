//! Check collections for slug problems

use anyhow::Result;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;
use std::fmt;

use crate::cache::ContentScope;
use crate::content::Entry;
use crate::Site;

lazy_static! {
    static ref SLUG_RE: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();
}

/// A slug that will misbehave at lookup time
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlugProblem {
    /// Later occurrences are unreachable (first match wins)
    Duplicate { slug: String, count: usize },
    Malformed { slug: String },
}

impl fmt::Display for SlugProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Duplicate { slug, count } => {
                write!(f, "slug `{}` appears {} times", slug, count)
            }
            Self::Malformed { slug } => write!(f, "slug `{}` is not lowercase-kebab-case", slug),
        }
    }
}

/// Find duplicate and malformed slugs, in collection order
pub fn slug_problems(entries: &[Entry]) -> Vec<SlugProblem> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for entry in entries {
        *counts.entry(entry.slug()).or_insert(0) += 1;
    }

    let mut problems = Vec::new();
    let mut reported = std::collections::HashSet::new();

    for entry in entries {
        let slug = entry.slug();
        if !reported.insert(slug) {
            continue;
        }
        if counts[slug] > 1 {
            problems.push(SlugProblem::Duplicate {
                slug: slug.to_string(),
                count: counts[slug],
            });
        }
        if !SLUG_RE.is_match(slug) {
            problems.push(SlugProblem::Malformed {
                slug: slug.to_string(),
            });
        }
    }

    problems
}

/// Load every collection and report slug problems
pub async fn run(site: &Site) -> Result<()> {
    let loader = site.loader();
    let scope = ContentScope::new(&loader);
    let mut failures = 0;

    for name in scope.names() {
        let entries = scope.collection(name)?.all().await?;
        let problems = slug_problems(entries);

        if problems.is_empty() {
            println!("{} ({} entries): ok", name, entries.len());
            continue;
        }

        println!("{} ({} entries):", name, entries.len());
        for problem in &problems {
            println!("   {}", problem);
        }
        failures += problems.len();
    }

    if failures > 0 {
        anyhow::bail!("Found {} slug problems", failures);
    }

    Ok(())
}
