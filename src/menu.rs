//! Interactive numbered menu
//!
//! Reads operator choices line by line from any `BufRead` and renders results
//! to any `Write`, so the same loop drives a terminal or a test buffer.

use std::io::{self, BufRead, Write};
use std::str::FromStr;
use std::sync::Arc;

use itertools::Itertools;
use log::{debug, warn};
use rust_decimal::Decimal;

use crate::algorithm::{
    NumericAttribute, Quantity, Reduction, SortAlgorithm, SortCriterion, SortDirection, SortField,
};
use crate::catalog::{CarCatalog, Grouping};
use crate::error::CatalogError;
use crate::models::{BodyType, Car, EngineType};

const OPTIONS: [&str; 9] = [
    "List of cars grouped by type of tyre",
    "List of cars with price within range and with specified car body type",
    "List of cars with specified components",
    "Mileage by car",
    "Show car models with specified engine type",
    "Sort cars by specified criterion and with specified order",
    "Show statistics for specified quantity",
    "Show the menu options",
    "Exit the program",
];

/// Reply to the statistics reduction prompt asking for every statistic at once
const SUMMARY: &str = "SUMMARY";

#[derive(Debug, thiserror::Error)]
enum MenuError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("{0}")]
    Input(String),

    #[error("end of input")]
    EndOfInput,

    #[error(transparent)]
    Io(#[from] io::Error),
}

type Step<T = ()> = std::result::Result<T, MenuError>;

enum Flow {
    Continue,
    Exit,
}

/// Menu loop over a catalog
#[derive(Debug)]
pub struct Menu<R, W> {
    catalog: CarCatalog,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    /// Create a menu reading from `input` and writing to `output`
    pub const fn new(catalog: CarCatalog, input: R, output: W) -> Self {
        Self {
            catalog,
            input,
            output,
        }
    }

    /// Consume the menu and return its output sink
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the exit option is chosen or the input ends
    ///
    /// Operator and catalog errors are reported and the menu prompts again.
    ///
    /// # Errors
    /// Only I/O failures on the input or output end the loop with an error.
    pub fn run(&mut self) -> io::Result<()> {
        self.print_options()?;
        loop {
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) | Err(MenuError::EndOfInput) => return Ok(()),
                Err(MenuError::Io(err)) => return Err(err),
                Err(err) => {
                    warn!("Request failed: {err}");
                    writeln!(self.output, "ERROR: {err}")?;
                }
            }
        }
    }

    fn step(&mut self) -> Step<Flow> {
        let option: u32 = self.prompt_number("MAIN MENU: INPUT YOUR OPTION")?;
        debug!("Menu option {option}");
        match option {
            1 => self.tyre_groups()?,
            2 => self.price_and_body()?,
            3 => self.components()?,
            4 => self.mileage()?,
            5 => self.engine_models()?,
            6 => self.sorted()?,
            7 => self.statistics()?,
            8 => self.print_options()?,
            9 => return Ok(Flow::Exit),
            other => return Err(MenuError::Input(format!("option {other} is not defined"))),
        }
        Ok(Flow::Continue)
    }

    fn print_options(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        for (number, option) in OPTIONS.iter().enumerate() {
            writeln!(self.output, "Option no. {} - {option}", number + 1)?;
        }
        writeln!(self.output)
    }

    fn prompt(&mut self, message: &str) -> Step<String> {
        write!(self.output, "{message}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(MenuError::EndOfInput);
        }
        Ok(line.trim().to_string())
    }

    fn prompt_number(&mut self, message: &str) -> Step<u32> {
        let line = self.prompt(message)?;
        line.parse()
            .map_err(|_| MenuError::Input(format!("'{line}' is not a number")))
    }

    fn prompt_decimal(&mut self, message: &str) -> Step<Decimal> {
        let line = self.prompt(message)?;
        Decimal::from_str(&line).map_err(|_| MenuError::Input(format!("'{line}' is not a price")))
    }

    /// Prompt for a value parsed by its `FromStr`, after listing the choices
    fn prompt_choice<T, C>(&mut self, message: &str, choices: &[C]) -> Step<T>
    where
        T: FromStr<Err = CatalogError>,
        C: std::fmt::Display,
    {
        writeln!(self.output, "{}", choices.iter().join(", "))?;
        Ok(self.prompt(message)?.parse()?)
    }

    fn write_cars(&mut self, cars: &[Arc<Car>]) -> io::Result<()> {
        if cars.is_empty() {
            return writeln!(self.output, "No cars found");
        }
        for car in cars {
            writeln!(self.output, "  {car}")?;
        }
        Ok(())
    }

    fn tyre_groups(&mut self) -> Step {
        for (tyre, cars) in self.catalog.group_by_tyre_type() {
            writeln!(self.output, "Tyre: {tyre}")?;
            self.write_cars(&cars)?;
        }
        Ok(())
    }

    fn price_and_body(&mut self) -> Step {
        let min = self.prompt_decimal("INPUT MIN PRICE")?;
        let max = self.prompt_decimal("INPUT MAX PRICE")?;
        if min > max {
            return Err(CatalogError::InvalidRange { min, max }.into());
        }
        let body_type: BodyType = self.prompt_choice("SELECT CAR BODY TYPE", BodyType::ALL)?;

        let cars = self.catalog.filter_by_price_and_body(min, max, body_type)?;
        self.write_cars(&cars)?;
        Ok(())
    }

    fn components(&mut self) -> Step {
        let known = self.catalog.known_components();
        let mut chosen: Vec<String> = Vec::new();

        loop {
            writeln!(
                self.output,
                "Option no. 1: ADD COMPONENT\nOption no. 2: EXIT"
            )?;
            match self.prompt_number("CHOOSE OPTION")? {
                1 if chosen.len() < known.len() => {
                    let remaining = known.iter().filter(|c| !chosen.contains(c)).collect_vec();
                    for (number, component) in remaining.iter().enumerate() {
                        writeln!(self.output, "Component {}: {component}", number + 1)?;
                    }
                    chosen.push(self.prompt_component(&chosen)?);
                }
                1 => {
                    writeln!(self.output, "All components are already chosen")?;
                    break;
                }
                2 => break,
                _ => writeln!(self.output, "Option is not available")?,
            }
        }

        let cars = self.catalog.filter_by_components(&chosen);
        writeln!(self.output, "Components: [{}]", chosen.iter().join(", "))?;
        self.write_cars(&cars)?;
        Ok(())
    }

    /// Prompt until the operator names a known component not yet chosen
    fn prompt_component(&mut self, chosen: &[String]) -> Step<String> {
        loop {
            let input = self.prompt("INPUT COMPONENT")?;
            match self.catalog.resolve_component(&input) {
                Ok(component) if chosen.contains(&component) => {
                    writeln!(self.output, "{component} is already chosen")?;
                }
                Ok(component) => return Ok(component),
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }

    fn mileage(&mut self) -> Step {
        for (model, mileage) in &self.catalog.mileage_by_car() {
            writeln!(self.output, "Car: {model} -> Mileage: {mileage}")?;
        }
        Ok(())
    }

    fn engine_models(&mut self) -> Step {
        let engine_types = self.catalog.distinct_engine_types();
        let engine_type: EngineType =
            self.prompt_choice("ENTER ENGINE TYPE", engine_types.as_slice())?;
        if !engine_types.contains(&engine_type) {
            let message = format!("no car has a {engine_type} engine");
            return Err(MenuError::Input(message));
        }

        let models = self.catalog.models_for_engine_type(engine_type);
        writeln!(self.output, "[{}]", models.iter().join(", "))?;
        Ok(())
    }

    fn sorted(&mut self) -> Step {
        writeln!(self.output, "{}", SortAlgorithm::ALL.iter().join(", "))?;
        let algorithm = match self.prompt("INPUT SORTING ALGORITHM")?.as_str() {
            "" => self.catalog.config().default_algorithm,
            tag => tag.parse()?,
        };
        let field: SortField = self.prompt_choice("INPUT SORT CRITERION", SortField::ALL)?;
        let direction: SortDirection = self.prompt_choice("INPUT ORDER", SortDirection::ALL)?;

        let criterion = SortCriterion::new(field, direction, algorithm);
        writeln!(self.output, "Sorted by {criterion}")?;
        let cars = self.catalog.sort(&criterion);
        self.write_cars(&cars)?;
        Ok(())
    }

    fn statistics(&mut self) -> Step {
        let attribute: NumericAttribute =
            self.prompt_choice("ENTER QUANTITY ATTRIBUTE", NumericAttribute::ALL)?;

        let reductions = Reduction::ALL.iter().join(", ");
        writeln!(self.output, "{reductions}, {SUMMARY}")?;
        let reply = self.prompt("ENTER REDUCTION")?;
        if reply.eq_ignore_ascii_case(SUMMARY) {
            match self.catalog.statistics(attribute)? {
                Some(summary) => write!(self.output, "{summary}")?,
                None => writeln!(self.output, "The catalog is empty")?,
            }
            return Ok(());
        }

        let quantity = Quantity::new(attribute, reply.parse::<Reduction>()?);
        writeln!(self.output, "{}", Grouping::ALL.iter().join(", "))?;
        let grouping = match self.prompt("ENTER GROUPING")?.as_str() {
            "" => Grouping::default(),
            tag => tag.parse()?,
        };

        for (label, statistic) in &self.catalog.aggregate(&quantity, grouping)? {
            writeln!(self.output, "{label}: {statistic}")?;
        }
        Ok(())
    }
}
