use std::sync::Arc;

use anyhow::Result;
use jiff::Zoned;
use jiff::civil::Date;
use log::info;

use crate::catalog::TemplateCatalog;
use crate::entities::{RoomConfiguration, RoomTemplate, TemplateSummary};
use crate::placement::PlacementEngine;
use crate::random::{RandomSource, SineHash};
use crate::seed::Seed;
use crate::selection;
use crate::util::{GeneratorConfig, assertions};

/// Produces the room of the day.
///
/// Generation is a pure function of the seed, the catalog, the configuration and the random source:
/// generating twice for the same date yields identical configurations.
/// The generator holds no mutable state and can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct DailyRoomGenerator<S: RandomSource = SineHash> {
    catalog: TemplateCatalog,
    config: GeneratorConfig,
    engine: PlacementEngine,
    source: S,
}

impl DailyRoomGenerator<SineHash> {
    pub fn new(catalog: TemplateCatalog, config: GeneratorConfig) -> Result<Self> {
        Self::with_source(catalog, config, SineHash)
    }
}

impl Default for DailyRoomGenerator<SineHash> {
    /// Built-in catalog with the default configuration
    fn default() -> Self {
        Self::new(TemplateCatalog::builtin(), GeneratorConfig::default())
            .expect("default configuration should be valid")
    }
}

impl<S: RandomSource> DailyRoomGenerator<S> {
    /// Creates a generator drawing from a custom random source.
    pub fn with_source(catalog: TemplateCatalog, config: GeneratorConfig, source: S) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            catalog,
            config,
            engine: PlacementEngine::new(config),
            source,
        })
    }

    /// Room of the current day, according to the system's local time zone.
    pub fn todays_room(&self) -> RoomConfiguration {
        self.room_for_date(Zoned::now().date())
    }

    pub fn room_for_date(&self, date: Date) -> RoomConfiguration {
        let room = self.generate(Seed::from(date));
        info!(
            "[GEN] room for {date}: {} with {} items ({} on fallback slots)",
            room.template_id(),
            room.n_items(),
            room.n_fallbacks()
        );
        room
    }

    /// Runs the full pipeline for `seed`: template choice, item selection, placement and assembly.
    pub fn generate(&self, seed: Seed) -> RoomConfiguration {
        let template_idx = selection::choose_template_index(&self.source, seed, self.catalog.len());
        let template = self.catalog.template(template_idx).clone();
        self.generate_in(template, seed)
    }

    /// Same as [`DailyRoomGenerator::generate`], but with a fixed template instead of the seeded choice.
    /// Useful to preview what a template looks like on a given day.
    pub fn generate_for_template(&self, template_id: &str, seed: Seed) -> Option<RoomConfiguration> {
        let template = self.catalog.get(template_id)?.clone();
        Some(self.generate_in(template, seed))
    }

    fn generate_in(&self, template: Arc<RoomTemplate>, seed: Seed) -> RoomConfiguration {
        let selected = selection::select_items(
            &template.item_pool,
            &self.source,
            seed,
            self.config.max_items,
        );
        let placements = self.engine.place_all(&selected, &template.furniture, seed, &self.source);

        let room = RoomConfiguration::assemble(template, selected, placements, seed, self.config.canvas());
        debug_assert!(assertions::room_is_consistent(&room, &self.config));
        room
    }

    pub fn list_templates(&self) -> Vec<TemplateSummary> {
        self.catalog.list()
    }

    pub fn template_by_id(&self, id: &str) -> Option<&RoomTemplate> {
        self.catalog.get(id).map(|t| t.as_ref())
    }

    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}
