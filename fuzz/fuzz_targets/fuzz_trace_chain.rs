//! Fuzz target for provenance chain construction and rendering.
//!
//! Goal: building a chain from arbitrary frames either fails with a construction error
//! or yields a chain whose traversal, rendering, and wire conversion **never panic**.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_trace_chain
//! ```

#![no_main]

use arbitrary::Arbitrary;
use configtrace_domain::PropertyTrace;
use configtrace_types::{PropertyKind, TraceV1};
use libfuzzer_sys::fuzz_target;
use std::sync::Arc;

#[derive(Arbitrary, Debug)]
enum Terminal {
    Unknown,
    Gradle,
    BuildLogic { source: String, line: Option<u32> },
    BuildLogicClass { name: String },
    Task { type_name: String, path: String },
}

#[derive(Arbitrary, Debug)]
enum Wrapper {
    Bean { type_name: String },
    Property { kind: u8, name: String },
    Project { path: String },
    SystemProperty { name: String },
}

/// Structured input: a terminal frame plus wrappers applied innermost first.
#[derive(Arbitrary, Debug)]
struct ChainInput {
    terminal: Terminal,
    wrappers: Vec<Wrapper>,
}

fn terminal(t: Terminal) -> Option<PropertyTrace> {
    match t {
        Terminal::Unknown => Some(PropertyTrace::unknown()),
        Terminal::Gradle => Some(PropertyTrace::gradle()),
        Terminal::BuildLogic { source, line } => PropertyTrace::build_logic(source, line).ok(),
        Terminal::BuildLogicClass { name } => PropertyTrace::build_logic_class(name).ok(),
        Terminal::Task { type_name, path } => {
            PropertyTrace::task(type_name.as_str(), path).ok()
        }
    }
}

fn wrap(w: Wrapper, tail: Arc<PropertyTrace>) -> Option<PropertyTrace> {
    match w {
        Wrapper::Bean { type_name } => PropertyTrace::bean(type_name.as_str(), tail).ok(),
        Wrapper::Property { kind, name } => {
            let kind = PropertyKind::ALL[usize::from(kind) % PropertyKind::ALL.len()];
            PropertyTrace::property(kind, name, tail).ok()
        }
        Wrapper::Project { path } => PropertyTrace::project(path, tail).ok(),
        Wrapper::SystemProperty { name } => PropertyTrace::system_property(name, tail).ok(),
    }
}

fuzz_target!(|input: ChainInput| {
    // Keep chains short enough to stay fast
    if input.wrappers.len() > 64 {
        return;
    }

    let Some(mut trace) = terminal(input.terminal) else {
        return;
    };
    for w in input.wrappers {
        match wrap(w, Arc::new(trace)) {
            Some(next) => trace = next,
            None => return,
        }
    }

    assert_eq!(trace.chain().last(), Some(trace.root()));
    assert!(trace.root().is_terminal());
    let rendered = trace.render();
    assert!(rendered.ends_with(&trace.root().render()));
    let _ = trace.containing_user_code();

    let dto = TraceV1::from(&trace);
    let back = PropertyTrace::try_from(&dto).ok();
    assert_eq!(back.as_ref(), Some(&trace));
});
