use crate::config::LibrarySpec;
use crate::process::ProcessRunner;
use crate::ui::{self, Level};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedFlags {
    pub compile: Vec<String>,
    pub link: Vec<String>,
}

/// Works out extra compiler and linker flags for the configured libraries.
///
/// A helper that cannot be run is logged and contributes an empty string;
/// it never fails the whole resolution.
pub fn resolve_flags(libraries: &[LibrarySpec], runner: &dyn ProcessRunner) -> ResolvedFlags {
    let mut flags = ResolvedFlags::default();

    for lib in libraries {
        if let Some(helper) = lib.helper() {
            flags.compile.push(query_helper(runner, helper, "--cflags"));
            flags.link.push(query_helper(runner, helper, "--libs"));
        } else if let Some(name) = lib.link_name() {
            flags.link.push(format!("-l{}", name));
        }
    }

    flags
}

fn query_helper(runner: &dyn ProcessRunner, helper: &str, query: &str) -> String {
    let command = format!("{} {}", helper, query);
    match runner.run(&command) {
        Ok(output) => output.trim().to_string(),
        Err(e) => {
            ui::log(
                Level::Error,
                &format!("Failed to get {} for {}", query.trim_start_matches('-'), helper),
                &[("err", &e)],
            );
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::fake::FakeRunner;

    fn named(name: &str) -> LibrarySpec {
        LibrarySpec {
            name: Some(name.to_string()),
            config: None,
        }
    }

    fn helper(cmd: &str) -> LibrarySpec {
        LibrarySpec {
            name: None,
            config: Some(cmd.to_string()),
        }
    }

    #[test]
    fn test_named_libraries_keep_order() {
        let runner = FakeRunner::new();
        let flags = resolve_flags(
            &[named("m"), LibrarySpec::default(), named("pthread")],
            &runner,
        );
        assert_eq!(flags.link, vec!["-lm", "-lpthread"]);
        assert!(flags.compile.is_empty());
        assert!(runner.calls().is_empty());
    }

    #[test]
    fn test_helper_output_is_trimmed() {
        let runner = FakeRunner::new()
            .respond("sdl2-config --cflags", "  -I/usr/include/SDL2 -D_REENTRANT\n")
            .respond("sdl2-config --libs", "-lSDL2\n");
        let flags = resolve_flags(&[helper("sdl2-config"), named("m")], &runner);

        assert_eq!(flags.compile, vec!["-I/usr/include/SDL2 -D_REENTRANT"]);
        assert_eq!(flags.link, vec!["-lSDL2", "-lm"]);
        assert_eq!(
            runner.calls(),
            vec!["sdl2-config --cflags", "sdl2-config --libs"]
        );
    }

    #[test]
    fn test_helper_wins_over_name() {
        let runner = FakeRunner::new()
            .respond("pkg --cflags", "-Ipkg")
            .respond("pkg --libs", "-lpkg");
        let lib = LibrarySpec {
            name: Some("ignored".to_string()),
            config: Some("pkg".to_string()),
        };
        let flags = resolve_flags(&[lib], &runner);
        assert_eq!(flags.link, vec!["-lpkg"]);
    }

    #[test]
    fn test_failing_helper_degrades_to_empty() {
        let runner = FakeRunner::new().respond("ok-config --libs", "-lok");
        let flags = resolve_flags(
            &[helper("missing-config"), helper("ok-config"), named("z")],
            &runner,
        );

        assert_eq!(flags.compile, vec!["", ""]);
        assert_eq!(flags.link, vec!["", "-lok", "-lz"]);
        assert_eq!(runner.calls().len(), 4);
    }
}
