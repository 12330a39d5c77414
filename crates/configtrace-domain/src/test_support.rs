use crate::message::StructuredMessage;
use crate::problem::PropertyProblem;
use crate::trace::PropertyTrace;
use configtrace_types::PropertyKind;

pub fn compile_task() -> PropertyTrace {
    PropertyTrace::task("org.example.Compile", ":app:compile").unwrap()
}

pub fn build_script() -> PropertyTrace {
    PropertyTrace::build_logic("build file 'build.gradle'", Some(7)).unwrap()
}

pub fn field_of(name: &str, tail: PropertyTrace) -> PropertyTrace {
    PropertyTrace::property(PropertyKind::Field, name, tail).unwrap()
}

pub fn project_access_message() -> StructuredMessage {
    StructuredMessage::build(|b| {
        b.text("invocation of ")
            .reference("Task.project")
            .text(" at execution time is unsupported.");
    })
}

pub fn problem(field: &str) -> PropertyProblem {
    PropertyProblem::new(field_of(field, compile_task()), project_access_message())
}
