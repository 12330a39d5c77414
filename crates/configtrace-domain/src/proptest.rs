//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Chain traversal (finite, restartable, single terminal frame)
//! - Structural equality and hashing
//! - Owner lookup through wrapping frames
//! - Message splicing

use crate::message::{Fragment, StructuredMessage};
use crate::problem::PropertyProblem;
use crate::trace::PropertyTrace;
use configtrace_types::{DocumentationSection, PropertyKind};
use proptest::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// Identifier-like names (properties, system properties, classes).
fn arb_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-zA-Z0-9_.]{0,15}").unwrap()
}

/// Dotted fully-qualified type names.
fn arb_type_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{1,6}(\\.[a-z]{1,6}){0,2}\\.[A-Z][a-zA-Z]{0,10}").unwrap()
}

/// Gradle-style project and task paths.
fn arb_path() -> impl Strategy<Value = String> {
    prop::string::string_regex("(:[a-z][a-z0-9-]{0,8}){1,3}").unwrap()
}

fn arb_kind() -> impl Strategy<Value = PropertyKind> {
    prop_oneof![
        Just(PropertyKind::Field),
        Just(PropertyKind::PropertyUsage),
        Just(PropertyKind::InputProperty),
        Just(PropertyKind::OutputProperty),
    ]
}

fn arb_section() -> impl Strategy<Value = Option<DocumentationSection>> {
    proptest::option::of(proptest::sample::select(DocumentationSection::ALL.to_vec()))
}

fn arb_terminal() -> impl Strategy<Value = PropertyTrace> {
    prop_oneof![
        Just(PropertyTrace::unknown()),
        Just(PropertyTrace::gradle()),
        (
            prop::string::string_regex("build file '[a-z]{1,8}\\.gradle'").unwrap(),
            proptest::option::of(1u32..5_000),
        )
            .prop_map(|(source, line)| PropertyTrace::build_logic(source, line).unwrap()),
        arb_type_name().prop_map(|name| PropertyTrace::build_logic_class(name).unwrap()),
        (arb_type_name(), arb_path())
            .prop_map(|(type_name, path)| PropertyTrace::task(type_name, path).unwrap()),
    ]
}

fn arb_trace() -> impl Strategy<Value = PropertyTrace> {
    arb_terminal().prop_recursive(8, 32, 1, |inner| {
        prop_oneof![
            (arb_type_name(), inner.clone())
                .prop_map(|(type_name, tail)| PropertyTrace::bean(type_name, tail).unwrap()),
            (arb_kind(), arb_name(), inner.clone()).prop_map(|(kind, name, tail)| {
                PropertyTrace::property(kind, name, tail).unwrap()
            }),
            (arb_path(), inner.clone())
                .prop_map(|(path, tail)| PropertyTrace::project(path, tail).unwrap()),
            (arb_name(), inner)
                .prop_map(|(name, tail)| PropertyTrace::system_property(name, tail).unwrap()),
        ]
    })
}

fn arb_fragment() -> impl Strategy<Value = Fragment> {
    prop_oneof![
        "[ a-z]{0,12}".prop_map(Fragment::Text),
        arb_name().prop_map(Fragment::Reference),
    ]
}

fn arb_message() -> impl Strategy<Value = StructuredMessage> {
    prop::collection::vec(arb_fragment(), 1..6).prop_map(|fragments| message_of(&fragments))
}

fn message_of(fragments: &[Fragment]) -> StructuredMessage {
    StructuredMessage::build(|b| {
        for fragment in fragments {
            match fragment {
                Fragment::Text(text) => b.text(text.as_str()),
                Fragment::Reference(name) => b.reference(name.as_str()),
            };
        }
    })
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

// ============================================================================
// Chain traversal
// ============================================================================

proptest! {
    #[test]
    fn chain_ends_at_exactly_one_terminal(trace in arb_trace()) {
        let frames: Vec<&PropertyTrace> = trace.chain().collect();
        prop_assert!(!frames.is_empty());
        let terminals = frames.iter().filter(|f| f.is_terminal()).count();
        prop_assert_eq!(terminals, 1);
        prop_assert!(frames[frames.len() - 1].is_terminal());
        prop_assert_eq!(frames[frames.len() - 1], trace.root());
        prop_assert_eq!(frames.len(), trace.depth());
    }

    #[test]
    fn chain_is_restartable(trace in arb_trace()) {
        let first: Vec<&PropertyTrace> = trace.chain().collect();
        let second: Vec<&PropertyTrace> = trace.chain().collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn render_is_own_phrase_followed_by_tail(trace in arb_trace()) {
        let rendered = trace.render();
        if let Some(tail) = trace.tail() {
            let tail_rendered = tail.render();
            prop_assert!(rendered.ends_with(&tail_rendered));
            prop_assert!(rendered.len() > tail_rendered.len());
        }
        prop_assert_eq!(rendered, trace.render());
    }
}

// ============================================================================
// Equality and hashing
// ============================================================================

proptest! {
    #[test]
    fn rebuilt_traces_are_equal_and_hash_alike(trace in arb_trace()) {
        let rebuilt = PropertyTrace::try_from(&configtrace_types::TraceV1::from(&trace)).unwrap();
        prop_assert_eq!(&rebuilt, &trace);
        prop_assert_eq!(hash_of(&rebuilt), hash_of(&trace));
    }

    #[test]
    fn wrapping_with_different_names_is_unequal(
        tail in arb_trace(),
        a in arb_name(),
        b in arb_name()
    ) {
        prop_assume!(a != b);
        let left = PropertyTrace::property(PropertyKind::Field, a, tail.clone()).unwrap();
        let right = PropertyTrace::property(PropertyKind::Field, b, tail).unwrap();
        prop_assert_ne!(left, right);
    }

    #[test]
    fn problems_compare_by_value(
        trace in arb_trace(),
        message in arb_message(),
        section in arb_section()
    ) {
        let build = || {
            let problem = PropertyProblem::new(trace.clone(), message.clone());
            match section {
                Some(s) => problem.with_documentation_section(s),
                None => problem,
            }
        };
        let (a, b) = (build(), build());
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(hash_of(&a), hash_of(&b));
        prop_assert_eq!(a.fingerprint(), b.fingerprint());
    }
}

// ============================================================================
// Containing user code
// ============================================================================

proptest! {
    #[test]
    fn containing_user_code_is_root_render(trace in arb_trace()) {
        prop_assert_eq!(trace.containing_user_code(), trace.root().render());
    }

    #[test]
    fn wrapping_frames_defer_to_tail(
        tail in arb_trace(),
        kind in arb_kind(),
        name in arb_name()
    ) {
        let trace = PropertyTrace::property(kind, name, tail.clone()).unwrap();
        prop_assert_eq!(trace.containing_user_code(), tail.containing_user_code());
    }
}

// ============================================================================
// Messages
// ============================================================================

proptest! {
    #[test]
    fn splicing_preserves_fragment_order(
        prefix in prop::collection::vec(arb_fragment(), 0..4),
        spliced in arb_message(),
        suffix in prop::collection::vec(arb_fragment(), 0..4)
    ) {
        let combined = StructuredMessage::build(|b| {
            b.message(&message_of(&prefix))
                .message(&spliced)
                .message(&message_of(&suffix));
        });

        let expected: Vec<Fragment> = prefix
            .iter()
            .chain(spliced.fragments())
            .chain(suffix.iter())
            .cloned()
            .collect();
        prop_assert_eq!(combined.fragments(), expected.as_slice());
    }

    #[test]
    fn render_concatenates_fragments(fragments in prop::collection::vec(arb_fragment(), 0..6)) {
        let expected: String = fragments
            .iter()
            .map(|f| match f {
                Fragment::Text(text) => text.clone(),
                Fragment::Reference(name) => format!("'{name}'"),
            })
            .collect();
        prop_assert_eq!(message_of(&fragments).render(), expected);
    }

    #[test]
    fn for_text_equals_single_text_builder(text in "[ -~]{0,20}") {
        let built = StructuredMessage::build(|b| {
            b.text(text.as_str());
        });
        prop_assert_eq!(StructuredMessage::for_text(text.as_str()), built);
    }
}
