// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use crate::context::Context;
use crate::footprint::Footprint;
use crate::pipeline::Stage;

/// One single-responsibility pipeline stage.
///
/// Processors are immutable after construction: any tunables they need are
/// captured from the configuration when the pipeline is built, and
/// everything else comes from the context. `process` must be deterministic
/// and must only change the fields named by [`Processor::footprint`].
pub trait Processor: std::fmt::Debug {
    /// Pipeline slot this processor fills.
    fn stage(&self) -> Stage;

    /// Human-readable name used in diagnostics.
    fn name(&self) -> &'static str {
        self.stage().name()
    }

    /// Context fields this processor may write.
    fn footprint(&self) -> Footprint;

    /// Transforms the context.
    fn process<'t>(&self, ctx: Context<'t>) -> Context<'t>;
}
