fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Server stubs are only exercised by tests standing up a mock node.
    tonic_build::configure()
        .build_client(true)
        .build_server(true)
        .compile_protos(&["proto/concordium.proto"], &["proto"])?;
    Ok(())
}
