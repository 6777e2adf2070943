// Command-line front end: expand one resource of a links document

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches};

use crate::config::{bind_all, parse_param, LinksFile};
use crate::domain::Bindings;

pub fn command() -> clap::Command {
    clap::Command::new("hyperuri")
        .about("Expand hypermedia resource links into request URIs")
        .arg(
            Arg::new("links")
                .short('l')
                .long("links")
                .value_name("FILE")
                .required(true)
                .help("Path to a YAML or JSON links document"),
        )
        .arg(
            Arg::new("resource")
                .short('r')
                .long("resource")
                .value_name("RESOURCE")
                .help("Resource to expand; lists all resources when omitted"),
        )
        .arg(
            Arg::new("param")
                .short('p')
                .long("param")
                .value_name("NAME=VALUE")
                .action(ArgAction::Append)
                .help("Parameter to bind; [a, b] binds a list, {k: v} a map, anything else is taken literally"),
        )
        .arg(
            Arg::new("base")
                .short('b')
                .long("base")
                .value_name("URL")
                .help("Base URI that relative links are joined against"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Enable debug logging"),
        )
}

/// Run the command and return what should be printed
pub fn run(matches: &ArgMatches) -> Result<String> {
    let links_path = matches
        .get_one::<String>("links")
        .context("--links is required")?;
    let file = LinksFile::load(links_path)?;
    let base = matches.get_one::<String>("base").map(String::as_str);
    let links = file.link_set(base)?;

    let Some(resource) = matches.get_one::<String>("resource") else {
        let mut listing = String::new();
        for (name, link) in links.iter() {
            if link.templated {
                let variables = link.href.variable_names().join(", ");
                listing.push_str(&format!("{}\t{}\t[{}]\n", name, link.href, variables));
            } else {
                listing.push_str(&format!("{}\t{}\n", name, link.href));
            }
        }
        return Ok(listing);
    };

    // Command-line parameters are bound first so they win over the document's
    let mut bindings = Bindings::new();
    let cli_params = matches
        .get_many::<String>("param")
        .into_iter()
        .flatten()
        .map(|arg| parse_param(arg))
        .collect::<Result<Vec<_>>>()?;
    bind_all(&mut bindings, cli_params);
    bind_all(&mut bindings, file.params()?);

    let uri = links.resolve(resource, bindings)?;
    Ok(format!("{}\n", uri))
}
