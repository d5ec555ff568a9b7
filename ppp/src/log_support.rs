/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

//! # Logging
//!
//! Everything in this crate reports what it does using [tracing] events:
//! - `DEBUG` when an error value is raised, and when a [crate::RandomSource] is reseeded.
//! - `WARN` when an expectation fails under [crate::ErrorAction::Logging].
//! - `ERROR` right before [crate::simple_error] exits, or an expectation fails under
//!   [crate::ErrorAction::Terminating].
//!
//! Logging is **DISABLED** by **default**. Nothing is printed until you install a
//! subscriber, either your own, or one of the two provided here. They both receive a
//! type that implements [`Into<TracingConfig>`]:
//!
//! ```
//! use r3bl_ppp::{DisplayPreference, TracingConfig, try_initialize_logging_thread_local};
//!
//! let level = tracing::Level::DEBUG;
//! let config_1: TracingConfig = level.into();
//!
//! let config_2: TracingConfig = DisplayPreference::Stdout.into();
//!
//! let _guard = try_initialize_logging_thread_local(config_1 + config_2).unwrap();
//! tracing::debug!("now visible on stdout");
//! ```
//!
//! The trace lines written by the checked accessors (eg, `CheckedVec::at`) do not go
//! through [tracing]. They are always written to `stderr`.

use std::ops::Add;

use miette::IntoDiagnostic;
use tracing::dispatcher;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, util::SubscriberInitExt};

use crate::ok;

/// Where the formatted events are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayPreference {
    Stdout,
    #[default]
    Stderr,
}

/// Level and destination for the subscriber installed by
/// [try_initialize_logging_global] or [try_initialize_logging_thread_local].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TracingConfig {
    pub level_filter: LevelFilter,
    pub display_preference: DisplayPreference,
}

/// Everything at `DEBUG` and above, written to `stderr`.
impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::DEBUG,
            display_preference: DisplayPreference::default(),
        }
    }
}

impl TracingConfig {
    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    #[must_use]
    pub fn get_display_preference(&self) -> DisplayPreference { self.display_preference }
}

pub mod tracing_config_options {
    use super::{Add, DisplayPreference, LevelFilter, TracingConfig};

    impl From<tracing::Level> for TracingConfig {
        fn from(level: tracing::Level) -> Self {
            Self {
                level_filter: level.into(),
                ..Default::default()
            }
        }
    }

    impl From<LevelFilter> for TracingConfig {
        fn from(level_filter: LevelFilter) -> Self {
            Self {
                level_filter,
                ..Default::default()
            }
        }
    }

    impl From<DisplayPreference> for TracingConfig {
        fn from(display_preference: DisplayPreference) -> Self {
            Self {
                display_preference,
                ..Default::default()
            }
        }
    }

    /// Merge two [TracingConfig] instances together. The more verbose level filter wins,
    /// and the `rhs` display preference clobbers the `self` one.
    impl Add<TracingConfig> for TracingConfig {
        type Output = Self;

        fn add(self, rhs: Self) -> Self::Output {
            Self {
                level_filter: self.level_filter.max(rhs.level_filter),
                display_preference: rhs.display_preference,
            }
        }
    }
}

/// Avoid gnarly type annotations by using a macro to create the `fmt` layer.
macro_rules! create_fmt {
    () => {
        tracing_subscriber::fmt::layer()
            .compact()
            .without_time()
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
            .with_ansi(false)
    };
}

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Create the `fmt` layer for `config`, writing to its [DisplayPreference] and filtered
/// by its level.
#[must_use]
pub fn create_display_layer(
    config: TracingConfig,
) -> Box<DynLayer<tracing_subscriber::Registry>> {
    let fmt_layer = create_fmt!();
    let level_filter = config.get_level_filter();
    match config.get_display_preference() {
        DisplayPreference::Stdout => Box::new(
            fmt_layer
                .with_writer(std::io::stdout)
                .with_filter(level_filter),
        ),
        DisplayPreference::Stderr => Box::new(
            fmt_layer
                .with_writer(std::io::stderr)
                .with_filter(level_filter),
        ),
    }
}

/// Global default subscriber, which once set, can't be unset or changed.
/// - This is great for apps.
/// - Docs for [Global default tracing
///   subscriber](https://docs.rs/tracing/latest/tracing/subscriber/fn.set_global_default.html)
///
/// If the level filter is [LevelFilter::OFF] nothing is installed.
///
/// # Errors
///
/// If a global subscriber has already been set.
pub fn try_initialize_logging_global(
    options: impl Into<TracingConfig>,
) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), LevelFilter::OFF) {
        return ok!();
    }

    tracing_subscriber::registry()
        .with(create_display_layer(it))
        .try_init()
        .into_diagnostic()
}

/// Thread local subscriber, which is thread local, and you can assign different ones
/// to different threads.
/// - This is great for tests.
/// - Docs for [Thread local tracing
///   subscriber](https://docs.rs/tracing/latest/tracing/subscriber/fn.set_default.html)
///
/// The subscriber stays installed until the returned guard is dropped. If the level
/// filter is [LevelFilter::OFF] nothing is installed and [None] is returned.
///
/// # Errors
///
/// This never fails today. The [miette::Result] keeps the signature the same as
/// [try_initialize_logging_global].
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<dispatcher::DefaultGuard>> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), LevelFilter::OFF) {
        return Ok(None);
    }

    let guard = tracing_subscriber::registry()
        .with(create_display_layer(it))
        .set_default();
    Ok(Some(guard))
}
