fn main() {
    let conf = prost_build::Config::new();

    hrpc_build::configure()
        .compile_with_config(
            conf,
            &["../../protocol/greet/v1/greet.proto"],
            &["../../protocol"],
        )
        .expect("failed to compile greet proto");
}
