use prometheus::{IntCounter, Registry};

pub struct Metrics {
    pub cycles_completed: IntCounter,
    pub bogus_blocks: IntCounter,
    pub string_encryptions: IntCounter,
}

impl Metrics {
    pub fn new(registry: &Registry) -> Self {
        let cycles_completed =
            IntCounter::new("cycles_completed", "Obfuscation cycles completed").unwrap();
        let bogus_blocks =
            IntCounter::new("bogus_blocks", "Bogus noise tokens inserted").unwrap();
        let string_encryptions =
            IntCounter::new("string_encryptions", "String encryption operations").unwrap();
        registry.register(Box::new(cycles_completed.clone())).unwrap();
        registry.register(Box::new(bogus_blocks.clone())).unwrap();
        registry.register(Box::new(string_encryptions.clone())).unwrap();
        Self {
            cycles_completed,
            bogus_blocks,
            string_encryptions,
        }
    }
}
