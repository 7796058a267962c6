//! # TestPass: headless harness for the traffic context plugin
//!
//! Wraps a `bevy::app::App` with `MinimalPlugins` + `TrafficContextPlugin`
//! so tests can load a batch, run the pass and assert on the output
//! resources without driving the schedule by hand.

mod fixtures;

pub use fixtures::ObservationFixture;

use bevy::app::App;
use bevy::prelude::*;

use crate::accident_response::AccidentScenario;
use crate::context_params::ContextParams;
use crate::context_plugin::{
    AccidentLog, ObservationLog, OptimizationLog, SensorBatch, TrafficContextPlugin,
};
use crate::flow_optimizer::OptimizationAction;
use crate::observation::Observation;
use crate::pass_summary::PassSummary;
use crate::sensor_row::RawSensorRow;

pub struct TestPass {
    app: App,
}

impl Default for TestPass {
    fn default() -> Self {
        Self::new()
    }
}

impl TestPass {
    // -----------------------------------------------------------------------
    // Setup (builder pattern, consumes and returns Self)
    // -----------------------------------------------------------------------

    /// An app with the plugin installed and an empty batch.
    pub fn new() -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(TrafficContextPlugin);
        app.update();
        Self { app }
    }

    pub fn with_params(mut self, params: ContextParams) -> Self {
        self.set_params(params);
        self
    }

    pub fn with_rows(mut self, rows: impl IntoIterator<Item = RawSensorRow>) -> Self {
        self.load_rows(rows);
        self
    }

    // -----------------------------------------------------------------------
    // Mutation between passes
    // -----------------------------------------------------------------------

    /// Replace the current batch.
    pub fn load_rows(&mut self, rows: impl IntoIterator<Item = RawSensorRow>) {
        self.app.world_mut().resource_mut::<SensorBatch>().rows = rows.into_iter().collect();
    }

    pub fn set_params(&mut self, params: ContextParams) {
        *self.app.world_mut().resource_mut::<ContextParams>() = params;
    }

    // -----------------------------------------------------------------------
    // Running
    // -----------------------------------------------------------------------

    /// Execute one `FixedUpdate` directly, bypassing Bevy's time system.
    pub fn run(&mut self) {
        self.app.world_mut().run_schedule(FixedUpdate);
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn observations(&self) -> &[Observation] {
        self.app.world().resource::<ObservationLog>().observations()
    }

    pub fn observation_log(&self) -> &ObservationLog {
        self.app.world().resource::<ObservationLog>()
    }

    pub fn scenarios(&self) -> &[AccidentScenario] {
        &self.app.world().resource::<AccidentLog>().scenarios
    }

    pub fn actions(&self) -> &[OptimizationAction] {
        &self.app.world().resource::<OptimizationLog>().actions
    }

    pub fn summary(&self) -> &PassSummary {
        self.app.world().resource::<PassSummary>()
    }

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }
}
