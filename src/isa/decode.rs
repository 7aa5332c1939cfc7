//! MIPS32 field decode for the covered instruction subset.
//!
//! Instructions outside the covered table decode as [`Mnemonic::Unknown`] /
//! [`Category::Unknown`]; the renamer treats these as a NOP that still
//! allocates a ROB entry and completes immediately with value 0, so
//! unrecognised instructions never stall the pipeline.

/// Decoded mnemonic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mnemonic {
    /// `jr rs` — jump to the value in `rs`.
    Jr,
    /// `syscall` — environment call; exit semantics checked at commit.
    Syscall,
    /// `add rd, rs, rt` — signed add, wraps silently on overflow.
    Add,
    /// `addu rd, rs, rt` — unsigned add.
    Addu,
    /// `sub rd, rs, rt` — signed subtract, wraps silently on overflow.
    Sub,
    /// `j target` — unconditional direct jump.
    J,
    /// `jal target` — jump and link (writes `$31`).
    Jal,
    /// `beq rs, rt, offset` — branch if equal.
    Beq,
    /// `bne rs, rt, offset` — branch if not equal.
    Bne,
    /// `addi rt, rs, imm` — signed add-immediate, wraps silently.
    Addi,
    /// `addiu rt, rs, imm` — unsigned add-immediate.
    Addiu,
    /// `lw rt, imm(rs)` — load word.
    Lw,
    /// `sw rt, imm(rs)` — store word.
    Sw,
    /// Unrecognised encoding; treated as a completed NOP.
    Unknown,
}

/// Functional-unit category; determines reservation-station class and
/// execute-stage behaviour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    /// Register-register ALU op (`add`, `addu`, `sub`).
    Alu,
    /// Register-immediate ALU op (`addi`, `addiu`).
    AluImm,
    /// `lw`.
    Load,
    /// `sw`.
    Store,
    /// `beq`/`bne`.
    Branch,
    /// `j`.
    Jump,
    /// `jal`.
    JumpLink,
    /// `jr`.
    IndirectJump,
    /// `syscall`.
    Syscall,
    /// Unrecognised encoding.
    Unknown,
}

impl Category {
    /// Reservation-station class: memory ops go to `LS`, everything else to `ALU`.
    #[must_use]
    pub fn is_memory(self) -> bool {
        matches!(self, Category::Load | Category::Store)
    }
}

/// Fully decoded instruction fields, ready for rename/dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decoded {
    /// The decoded mnemonic.
    pub mnemonic: Mnemonic,
    /// The functional-unit category.
    pub category: Category,
    /// `rs` field (bits 25:21).
    pub rs: usize,
    /// `rt` field (bits 20:16).
    pub rt: usize,
    /// `rd` field (bits 15:11).
    pub rd: usize,
    /// Sign-extended 16-bit immediate.
    pub imm16: i32,
    /// 26-bit jump immediate (word-aligned target fragment, unshifted).
    pub imm26: u32,
    /// Destination architectural register index, or `None` for no destination.
    pub dest: Option<usize>,
    /// Whether this instruction uses `rs` as a source.
    pub uses_rs: bool,
    /// Whether this instruction uses `rt` as a source.
    pub uses_rt: bool,
}

/// Decodes a raw 32-bit MIPS32 instruction word.
#[must_use]
pub fn decode(inst: u32) -> Decoded {
    let opcode = (inst >> 26) & 0x3F;
    let funct = inst & 0x3F;
    let rs = ((inst >> 21) & 0x1F) as usize;
    let rt = ((inst >> 16) & 0x1F) as usize;
    let rd = ((inst >> 11) & 0x1F) as usize;
    let imm16 = sign_extend_16(inst & 0xFFFF);
    let imm26 = inst & 0x3FF_FFFF;

    let (mnemonic, category, dest, uses_rs, uses_rt) = if opcode == 0x00 && funct == 0x08 {
        (Mnemonic::Jr, Category::IndirectJump, None, true, false)
    } else if opcode == 0x00 && funct == 0x0C {
        (Mnemonic::Syscall, Category::Syscall, None, false, false)
    } else if opcode == 0x00 && funct == 0x20 {
        (Mnemonic::Add, Category::Alu, Some(rd), true, true)
    } else if opcode == 0x00 && funct == 0x21 {
        (Mnemonic::Addu, Category::Alu, Some(rd), true, true)
    } else if opcode == 0x00 && funct == 0x22 {
        (Mnemonic::Sub, Category::Alu, Some(rd), true, true)
    } else if opcode == 0x02 {
        (Mnemonic::J, Category::Jump, None, false, false)
    } else if opcode == 0x03 {
        (Mnemonic::Jal, Category::JumpLink, Some(31), false, false)
    } else if opcode == 0x04 {
        (Mnemonic::Beq, Category::Branch, None, true, true)
    } else if opcode == 0x05 {
        (Mnemonic::Bne, Category::Branch, None, true, true)
    } else if opcode == 0x08 {
        (Mnemonic::Addi, Category::AluImm, Some(rt), true, false)
    } else if opcode == 0x09 {
        (Mnemonic::Addiu, Category::AluImm, Some(rt), true, false)
    } else if opcode == 0x23 {
        (Mnemonic::Lw, Category::Load, Some(rt), true, false)
    } else if opcode == 0x2B {
        (Mnemonic::Sw, Category::Store, None, true, true)
    } else {
        (Mnemonic::Unknown, Category::Unknown, None, false, false)
    };

    Decoded {
        mnemonic,
        category,
        rs,
        rt,
        rd,
        imm16,
        imm26,
        dest,
        uses_rs,
        uses_rt,
    }
}

/// Sign-extends a 16-bit immediate field to `i32`.
#[must_use]
pub fn sign_extend_16(imm: u32) -> i32 {
    (imm as i16) as i32
}

/// Assembles a 32-bit little-endian instruction word from four memory bytes.
#[must_use]
pub fn assemble_word(bytes: [u8; 4]) -> u32 {
    u32::from(bytes[0])
        | (u32::from(bytes[1]) << 8)
        | (u32::from(bytes[2]) << 16)
        | (u32::from(bytes[3]) << 24)
}
