use anyhow::Error;
use crux_core::macros::Effect;
use crux_core::render::Render;
use crux_core::{App, Command};
use itertools::Itertools;
use termtree::Tree;
use thiserror::Error;
use tracing::{info, trace, Level};

pub use assembly::configuration::{BicycleConfiguration, ConfigurationName};
use assembly::processor::ConfigurationProcessor;
pub use bicycle::gearing::{Gear, Wheel};
use bicycle::gearing::GearingError;
use bicycle::part::Part;
use catalog::builder::build_parts;
use catalog::spares::select_spares;
pub use crux_core::Core;
use stores::parts::load_part_descriptors;
pub use stores::parts::PartsSource;
use stores::spares::store_spares;
pub use stores::spares::SparesSource;

#[derive(Default)]
pub struct SparesBuilder;

#[derive(Default)]
pub struct Model {
    error: Option<String>,
}

#[derive(serde::Serialize, serde::Deserialize, Default, PartialEq, Debug)]
pub struct OperationViewModel {
    pub error: Option<String>,
}

#[derive(Effect)]
pub struct Capabilities {
    render: Render<Event>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub enum Event {
    None,
    Build {
        parts: PartsSource,
        configuration: BicycleConfiguration,
        gear: Option<Gear>,
        output: SparesSource,
    },
}

impl App for SparesBuilder {
    type Event = Event;
    type Model = Model;
    type ViewModel = OperationViewModel;
    type Capabilities = Capabilities;
    type Effect = Effect;

    fn update(
        &self,
        event: Self::Event,
        model: &mut Self::Model,
        caps: &Self::Capabilities,
    ) -> Command<Self::Effect, Self::Event> {
        #[allow(unused_mut)]
        let mut default_render = true;
        match event {
            Event::None => {}
            Event::Build {
                parts,
                configuration,
                gear,
                output,
            } => {
                let try_fn = |_model: &mut Model| -> Result<(), AppError> {
                    let result = build_spares_listing(&parts, &configuration, &gear, &output)
                        .map_err(|cause| AppError::OperationError(cause.into()))?;

                    Ok(result)
                };

                if let Err(e) = try_fn(model) {
                    model.error.replace(format!("{:?}", e));
                };
            }
        }

        if default_render {
            // This causes the shell to request the view, via `view()`
            caps.render.render();
        }

        Command::done()
    }

    fn view(&self, model: &Self::Model) -> Self::ViewModel {
        OperationViewModel {
            error: model.error.clone(),
        }
    }
}

#[derive(Error, Debug)]
enum AppError {
    #[error("Operation error, cause: {0}")]
    OperationError(anyhow::Error),
}

#[tracing::instrument(level = Level::DEBUG)]
fn build_spares_listing(
    parts_source: &PartsSource,
    configuration: &BicycleConfiguration,
    gear: &Option<Gear>,
    output: &SparesSource,
) -> Result<(), Error> {
    let descriptors = load_part_descriptors(parts_source)?;
    info!("Loaded {} part descriptors", descriptors.len());

    let catalog_parts = build_parts(&descriptors)?;
    info!("Built {} parts", catalog_parts.len());
    trace!("{:?}", catalog_parts);

    info!("Configuration: {}", configuration.name);

    let result = ConfigurationProcessor::process(&catalog_parts, configuration)?;
    let configuration_parts = result.parts;
    info!("Matched {} parts for configuration", configuration_parts.len());

    let spare_parts = select_spares(&configuration_parts);
    info!("Found {} spares", spare_parts.len());

    let tree = build_listing_tree(configuration, &configuration_parts, &spare_parts, gear)?;
    info!("{}", tree);

    store_spares(output, &spare_parts)?;

    Ok(())
}

fn build_listing_tree(
    configuration: &BicycleConfiguration,
    configuration_parts: &[Part],
    spare_parts: &[Part],
    gear: &Option<Gear>,
) -> Result<Tree<String>, GearingError> {
    let mut tree = Tree::new(format!("Configuration '{}'", configuration.name));

    let mut parts_node = Tree::new(format!("Parts ({})", configuration_parts.len()));
    for part in configuration_parts.iter() {
        let spare_chunk = match part.needs_spare {
            true => "spare",
            false => "no spare",
        };
        let part_label = format!("{}: '{}' ({})", part.name, part.description, spare_chunk);

        parts_node.leaves.push(Tree::new(part_label));
    }
    tree.leaves.push(parts_node);

    let spares_label = match spare_parts.is_empty() {
        true => "Spares (0)".to_string(),
        false => format!(
            "Spares ({}): {}",
            spare_parts.len(),
            spare_parts
                .iter()
                .map(|part| part.name.as_str())
                .join(", ")
        ),
    };
    tree.leaves.push(Tree::new(spares_label));

    if let Some(gear) = gear {
        let mut gearing_node = Tree::new("Gearing".to_string());

        let ratio = gear.ratio()?;
        gearing_node
            .leaves
            .push(Tree::new(format!("ratio: {}", ratio.round_dp(2).normalize())));

        if gear.wheel.is_some() {
            let gear_inches = gear.gear_inches()?;
            gearing_node
                .leaves
                .push(Tree::new(format!(
                    "gear inches: {}",
                    gear_inches.round_dp(2).normalize()
                )));
        }

        tree.leaves.push(gearing_node);
    }

    Ok(tree)
}
