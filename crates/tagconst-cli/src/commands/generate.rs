use crate::cli::TargetArgs;
use crate::support::{
    print_json_or_exit, render_target_or_exit, resolve_config_or_exit, root_label,
};
use serde_json::json;
use tagconst_kernel::write_artifact;

const GENERATE_KIND: &str = "tagconst.generate.v1";

pub fn run(target: TargetArgs, json_output: bool) {
    let config = resolve_config_or_exit(&target);
    let rendered = render_target_or_exit(&config);

    write_artifact(&config.output, &rendered.contents).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(2);
    });
    tracing::info!(
        output = %config.output.display(),
        groups = rendered.generated.group_count(),
        "generated constants file"
    );

    if json_output {
        let payload = json!({
            "schema": 1,
            "kind": GENERATE_KIND,
            "input": config.input.display().to_string(),
            "output": config.output.display().to_string(),
            "package": config.package,
            "root": config.root,
            "groupCount": rendered.generated.group_count(),
            "constantCount": rendered.generated.constant_count(),
            "outputDigest": rendered.digest,
        });
        print_json_or_exit(&payload, "generate");
    } else {
        println!("tagconst generate");
        println!("  Input: {}", config.input.display());
        println!("  Output: {}", config.output.display());
        println!("  Package: {}", config.package);
        println!("  Root: {}", root_label(&config));
        println!("  Groups: {}", rendered.generated.group_count());
        println!("  Constants: {}", rendered.generated.constant_count());
        println!("  Digest: {}", rendered.digest);
    }
}
