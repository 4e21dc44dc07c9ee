// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use std::{fmt, process};

use clap::{value_t, App, Arg, ArgMatches};
use log::info;
use once_cell::sync::Lazy;
use rand::{rngs::StdRng, SeedableRng};
use regex::Regex;

use chipboard::{
    board::{CornerOrder, Generation, TileState},
    BoardBuilder, ChipCatalog, ChipKind,
};

fn main() {
    env_logger::init();

    let matches = App::new("chipgen")
        .version("0.1")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Generates a random circuit board and prints its layout.")
        .arg(
            Arg::with_name("width")
                .short("W")
                .long("width")
                .value_name("WIDTH")
                .help("width of the board in cells")
                .takes_value(true)
                .default_value("40"),
        )
        .arg(
            Arg::with_name("height")
                .short("H")
                .long("height")
                .value_name("HEIGHT")
                .help("height of the board in cells")
                .takes_value(true)
                .default_value("24"),
        )
        .arg(
            Arg::with_name("seed")
                .short("s")
                .long("seed")
                .value_name("SEED")
                .help("seed for the random generator, chosen at random if omitted")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("order")
                .short("o")
                .long("order")
                .value_name("ORDER")
                .help("order in which open corners are filled")
                .takes_value(true)
                .possible_values(&["fifo", "center"])
                .case_insensitive(true)
                .default_value("fifo"),
        )
        .arg(
            Arg::with_name("weights")
                .short("w")
                .long("weights")
                .value_name("WEIGHTS")
                .help("override spawn weights, e.g. \"processor=2,bit=0\"")
                .takes_value(true),
        )
        .get_matches();

    let width = value_t!(matches, "width", u32).unwrap_or_else(|e| e.exit());
    let height = value_t!(matches, "height", u32).unwrap_or_else(|e| e.exit());
    let seed = if matches.is_present("seed") {
        value_t!(matches, "seed", u64).unwrap_or_else(|e| e.exit())
    } else {
        rand::random()
    };
    let order = match matches.value_of("order").map(str::to_ascii_lowercase).as_deref() {
        Some("center") => CornerOrder::CenterFirst,
        _ => CornerOrder::Fifo,
    };
    let catalog = choose_catalog(&matches);

    let builder = match BoardBuilder::new(width, height, &catalog) {
        Ok(builder) => builder.corner_order(order),
        Err(err) => {
            eprintln!("Cannot build board: {}", err);
            process::exit(1);
        }
    };
    info!("building {}x{} board with seed {}", width, height, seed);
    let generation = builder.generate(&mut StdRng::seed_from_u64(seed));

    println!("seed: {}", seed);
    println!();
    show_grid(&generation);
    println!();
    show_chips(&generation);
}

/// Build the chip catalog, applying any weight overrides from the command line. Exits
/// with a message if the overrides cannot be parsed.
fn choose_catalog(matches: &ArgMatches) -> ChipCatalog<ChipKind> {
    /// Matcher for a single `name=weight` entry.
    static ENTRY: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^(?x)(?P<name>[a-z]+)\s*(?:=|:)\s*(?P<weight>[0-9]+)$").unwrap()
    });

    let standard = ChipCatalog::standard();
    let overrides = match matches.value_of("weights") {
        None => return standard.clone(),
        Some(overrides) => overrides.to_ascii_lowercase(),
    };
    let mut weights = Vec::new();
    for entry in overrides.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let captures = match ENTRY.captures(entry) {
            Some(captures) => captures,
            None => {
                eprintln!("Invalid weight \"{}\", expected <chip>=<weight>", entry);
                process::exit(1);
            }
        };
        let kind = match captures.name("name").unwrap().as_str() {
            "processor" | "cpu" | "p" => ChipKind::Processor,
            "memory" | "ram" | "m" => ChipKind::Memory,
            "chip" | "c" => ChipKind::Chip,
            "square" | "s" => ChipKind::Square,
            "brick" | "k" => ChipKind::Brick,
            "byte" | "y" => ChipKind::Byte,
            "bit" | "b" => ChipKind::Bit,
            other => {
                eprintln!("invalid chip: {}, choose \"processor\", \"memory\", \"chip\", \"square\", \"brick\", \"byte\", or \"bit\"", other);
                process::exit(1);
            }
        };
        let weight = match captures.name("weight").unwrap().as_str().parse::<u32>() {
            Ok(weight) => weight,
            Err(_) => {
                eprintln!("weight for {} is too large", kind);
                process::exit(1);
            }
        };
        weights.push((kind, weight));
    }
    match standard.reweighted(weights) {
        Ok(catalog) => catalog,
        // Every kind is in the standard catalog.
        Err(err) => unreachable!("{}", err),
    }
}

/// Print out the final tile grid, one character per cell.
fn show_grid(generation: &Generation<ChipKind>) {
    let board = &generation.board;
    let grid = &generation.grid;
    for row in grid.dimensions().iter_coordinates() {
        let line: String = row
            .map(|coord| match grid[coord] {
                TileState::Chip => match board.chip_at(coord) {
                    Some(chip) => ChipAbbreviation(*chip.id()).to_string(),
                    None => "?".to_string(),
                },
                state => TileChar(state).to_string(),
            })
            .collect();
        println!("{}", line);
    }
}

/// Print out the chips in placement order followed by the build counters.
fn show_chips(generation: &Generation<ChipKind>) {
    for (i, chip) in generation.board.chips().iter().enumerate() {
        let pos = chip.position();
        let size = chip.footprint();
        println!(
            "{:>4}  {:<9} at {:>3},{:<3} {}x{}{}",
            i,
            chip.id(),
            pos.x,
            pos.y,
            size.x,
            size.y,
            if chip.flipped() { " (flipped)" } else { "" }
        );
    }
    let stats = generation.stats;
    println!();
    println!(
        "{} chips, {:.1}% covered; {} corners visited, {} stale, {} unfit",
        generation.board.chips().len(),
        generation.coverage() * 100.0,
        stats.corners,
        stats.stale,
        stats.unfit
    );
}

/// Display helper that prints a non-chip tile.
struct TileChar(TileState);

impl fmt::Display for TileChar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self.0 {
            TileState::Empty => " ",
            TileState::Perimeter => ".",
            TileState::Border => ":",
            TileState::Connection => "=",
            TileState::Chip => "#",
        })
    }
}

/// Display helper that prints the chip's type abbreviation.
struct ChipAbbreviation(ChipKind);

impl ChipAbbreviation {
    fn abbrev(&self) -> &'static str {
        match self.0 {
            ChipKind::Processor => "P",
            ChipKind::Memory => "M",
            ChipKind::Chip => "C",
            ChipKind::Square => "S",
            ChipKind::Brick => "K",
            ChipKind::Byte => "Y",
            ChipKind::Bit => "B",
        }
    }
}

impl fmt::Display for ChipAbbreviation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.abbrev())
    }
}
