use anyhow::{Result, anyhow};

/// Mock chain gateway. Connection state is real; everything on the wire is
/// a deterministic stub so command flows are reproducible in tests.
#[derive(Debug, Default)]
pub struct ChainGateway {
    connected: Option<String>,
    deployed: Vec<String>,
}

impl ChainGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn connected_network(&self) -> Option<&str> {
        self.connected.as_deref()
    }

    pub fn connect(&mut self, network: &str) -> Result<String> {
        let network = network.trim();
        if network.is_empty() {
            return Err(anyhow!("Network name required"));
        }
        self.connected = Some(network.to_string());
        Ok(format!("Connected to {network}"))
    }

    pub fn disconnect(&mut self) -> Result<String> {
        match self.connected.take() {
            Some(network) => Ok(format!("Disconnected from {network}")),
            None => Err(anyhow!("no wallet connected")),
        }
    }

    /// Fake gas price in gwei, keyed off the connected network so the same
    /// session always sees the same number.
    pub fn gas_price(&self) -> Result<u64> {
        let network = self
            .connected
            .as_deref()
            .ok_or_else(|| anyhow!("not connected; run `connect <network>` first"))?;
        Ok(12 + u64::from(blake3::hash(network.as_bytes()).as_bytes()[0]) % 80)
    }

    /// Fake deployment returning a deterministic address derived from the
    /// contract name and arguments.
    pub fn deploy(&mut self, contract: &str, args: &[String]) -> Result<String> {
        if contract.trim().is_empty() {
            return Err(anyhow!("Contract name required"));
        }
        let mut hasher = blake3::Hasher::new();
        hasher.update(contract.as_bytes());
        for a in args {
            hasher.update(b"\n");
            hasher.update(a.as_bytes());
        }
        let digest = hasher.finalize();
        let address = format!("0x{}", &digest.to_hex()[..40]);
        self.deployed.push(contract.to_string());
        Ok(address)
    }

    pub fn deployed(&self) -> &[String] {
        &self.deployed
    }
}
