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

use r3bl_ppp::{CheckedString, DisplayPreference, TracingConfig, checked_vec, expect_with,
               ok, policy, simple_error, try_initialize_logging_thread_local};
use tracing_core::LevelFilter;

/// This is the binary under test for the behaviors that end the process, or that can
/// only be observed on `stdout` and `stderr`. There is no easy way to test those without
/// spawning a new process. It is driven by the `assert_cmd` tests in
/// `tests/test_process_behavior.rs`.
///
/// It takes 1 argument, which picks the scenario:
/// - `simple_error`: calls [simple_error], which exits with status 1.
/// - `expect_ignore`: fails an expectation under [policy::Ignore], with logging on, then
///   exits with 0.
/// - `expect_logging`: fails an expectation under [policy::Logging], then exits with 0.
/// - `expect_terminating`: fails an expectation under [policy::Terminating], which aborts.
/// - `vec_trace`: runs each accessor of the checked types once, so their trace lines show
///   up on `stderr`.
/// - `index_panic`: indexes past the end of a `CheckedVec`, which panics.
/// - `stdout` or `stderr`: installs the tracing subscriber with that
///   [DisplayPreference], and emits one event per level.
fn main() -> miette::Result<()> {
    // Get the argument passed to the binary.
    let arg = std::env::args().nth(1).unwrap_or_default();

    match arg.as_str() {
        "simple_error" => simple_error("something went wrong"),
        "expect_ignore" => {
            let _guard = try_initialize_logging_thread_local(TracingConfig {
                level_filter: LevelFilter::TRACE,
                display_preference: DisplayPreference::Stderr,
            })?;
            let x = -1;
            expect_with::<policy::Ignore>(|| x > 0, "x must be positive")?;
            println!("still running");
        }
        "expect_logging" => {
            let _guard = try_initialize_logging_thread_local(TracingConfig {
                level_filter: LevelFilter::WARN,
                display_preference: DisplayPreference::Stdout,
            })?;
            let x = -1;
            expect_with::<policy::Logging>(|| x > 0, "x must be positive")?;
            println!("still running");
        }
        "expect_terminating" => {
            let x = -1;
            expect_with::<policy::Terminating>(|| x > 0, "x must be positive")?;
            println!("unreachable");
        }
        "vec_trace" => {
            let mut numbers = checked_vec![10, 20, 30];
            let _ = numbers.at(0)?;
            *numbers.at_mut(1)? += 1;
            let _copy = numbers[2];
            numbers[0] = 11;

            let mut text = CheckedString::from("abc");
            let _ = text.at(0)?;
            text.set_at(0, b'x')?;
            let _copy = text[1];

            let span = numbers.as_span();
            let _ = span.at(0)?;
            let _copy = span[1];

            let mut span_mut = numbers.as_span_mut();
            let _ = span_mut.at(0)?;
            *span_mut.at_mut(0)? = 12;
            let _copy = span_mut[1];
            span_mut[2] = 33;

            println!("{:?} {text}", numbers.as_vec());
        }
        "index_panic" => {
            let numbers = checked_vec![1, 2, 3];
            println!("{}", numbers[5]);
        }
        "stdout" | "stderr" => {
            let display_preference = if arg == "stdout" {
                DisplayPreference::Stdout
            } else {
                DisplayPreference::Stderr
            };
            let default_guard = try_initialize_logging_thread_local(TracingConfig {
                level_filter: LevelFilter::DEBUG,
                display_preference,
            })?;

            // Log some messages.
            tracing::error!("error");
            tracing::warn!("warn");
            tracing::info!("info");
            tracing::debug!("debug");
            tracing::trace!("trace");

            drop(default_guard);
        }
        other => {
            return Err(miette::miette!(
                help = "simple_error, expect_ignore, expect_logging, expect_terminating, \
                        vec_trace, index_panic, stdout, stderr",
                "unknown scenario: {other:?}"
            ));
        }
    }

    ok!()
}
