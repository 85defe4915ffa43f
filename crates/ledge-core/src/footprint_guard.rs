// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Footprint enforcement for pipeline stages.
//!
//! Every processor declares the context fields it owns. [`guard_process`]
//! runs a processor and, when enforcement is compiled in, diffs the context
//! before and after. A write outside the declared footprint is reported with
//! [`std::panic::panic_any`] carrying a typed [`FootprintViolation`], which
//! tests match with `downcast_ref`.
//!
//! # Cfg Gating
//!
//! Enforcement is active when `debug_assertions` is set or when the
//! `footprint_enforce_release` feature is enabled. Otherwise
//! [`guard_process`] is a direct call.
//!
//! Violations are programmer errors in a processor, not runtime conditions;
//! fix the processor or its declaration.

use crate::context::Context;
use crate::footprint::Footprint;
use crate::pipeline::Stage;
use crate::processor::Processor;

/// Panic payload raised when a processor writes outside its footprint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FootprintViolation {
    /// Name of the offending processor.
    pub processor: &'static str,
    /// Its pipeline stage.
    pub stage: Stage,
    /// Fields it declared.
    pub declared: Footprint,
    /// Fields it changed without declaring them.
    pub undeclared: Footprint,
}

impl std::fmt::Display for FootprintViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} wrote undeclared fields {:?} (declared {:?})",
            self.processor, self.undeclared, self.declared
        )
    }
}

/// Runs `processor` on `ctx`, checking its writes against its footprint.
#[cfg(any(debug_assertions, feature = "footprint_enforce_release"))]
pub fn guard_process<'t>(processor: &dyn Processor, ctx: Context<'t>) -> Context<'t> {
    let before = Context {
        faults: ctx.faults.clone(),
        ..ctx
    };
    let after = processor.process(ctx);
    let declared = processor.footprint();
    let undeclared = Footprint::diff(&before, &after).without(declared);
    if !undeclared.is_empty() {
        std::panic::panic_any(FootprintViolation {
            processor: processor.name(),
            stage: processor.stage(),
            declared,
            undeclared,
        });
    }
    after
}

/// Runs `processor` on `ctx`.
#[cfg(not(any(debug_assertions, feature = "footprint_enforce_release")))]
pub fn guard_process<'t>(processor: &dyn Processor, ctx: Context<'t>) -> Context<'t> {
    processor.process(ctx)
}
