use crate::cli::TargetArgs;
use crate::support::{render_target_or_exit, resolve_config_or_exit};
use std::io::Write;

pub fn run(target: TargetArgs) {
    let config = resolve_config_or_exit(&target);
    let rendered = render_target_or_exit(&config);

    let mut stdout = std::io::stdout().lock();
    let written = stdout.write_all(rendered.contents.as_bytes());
    if let Err(e) = written.and_then(|()| stdout.flush()) {
        eprintln!("error: failed to write to stdout: {e}");
        std::process::exit(2);
    }
}
