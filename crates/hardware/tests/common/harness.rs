use rvseq_core::config::Config;
use rvseq_core::core::Cpu;
use rvseq_core::sim::{RunResult, Simulator, Snapshot};

pub struct TestContext {
    pub sim: Simulator,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
        Self {
            sim: Simulator::new(config),
        }
    }

    /// Convenience accessor for the CPU.
    pub fn cpu(&self) -> &Cpu {
        &self.sim.cpu
    }

    /// Mutable convenience accessor for the CPU.
    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.sim.cpu
    }

    /// Load a sequence of 32-bit instructions into memory at `addr` and set the PC.
    pub fn load_program(mut self, addr: u32, instructions: &[u32]) -> Self {
        for (i, inst) in instructions.iter().enumerate() {
            let offset = addr + (i as u32) * 4;
            self.sim.cpu.mem.write_inst_u32(offset, *inst).unwrap();
        }
        self.sim.cpu.pc = addr;
        self
    }

    /// Store a data word (little-endian) at `addr`.
    pub fn with_word(mut self, addr: u32, val: u32) -> Self {
        self.sim.cpu.mem.write_u32(addr, val).unwrap();
        self
    }

    /// Set a general-purpose register value.
    pub fn set_reg(&mut self, reg: usize, val: u32) {
        self.sim.cpu.regs.write(reg, val);
    }

    /// Read a general-purpose register value.
    pub fn get_reg(&self, reg: usize) -> u32 {
        self.sim.cpu.regs.read(reg)
    }

    /// Read a data word (little-endian) at `addr`.
    pub fn word(&self, addr: u32) -> u32 {
        self.sim.cpu.mem.read_u32(addr).unwrap()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.sim.snapshot()
    }

    /// Run with an instruction budget.
    pub fn run(&mut self, max_instr: u64) -> RunResult {
        self.sim.run(max_instr)
    }
}
