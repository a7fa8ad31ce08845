//! NWK layer identities as specified in ETSI EN 300 175-6.
//!
//! Access Rights Identities (ARI), International Portable User/Equipment
//! identities (IPUI/IPEI) and Temporary Portable User identities (TPUI).
//! The bit-level codecs here feed the FIXED-IDENTITY and PORTABLE-IDENTITY
//! Information Elements.

/// ARI classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum AriClass {
    /// Residential and private (PBX) single- and small multiple-cell systems.
    A = 0x0,
    /// Private (PABX) multiple-cell systems.
    B = 0x1,
    /// Public single- and multiple-cell systems.
    C = 0x2,
    /// Public DECT access to a GSM network.
    D = 0x3,
    /// PP to PP direct communication (private).
    E = 0x4,
}

/// Access Rights Identifier.
///
/// The class determines the field layout and the total bit length (36 bits
/// for class A, 31 bits for the others).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ari {
    /// Class A: Equipment Manufacturer Code + Fixed Part Number.
    ClassA { emc: u16, fpn: u32 },
    /// Class B: Equipment Installer's Code + FPN + Fixed Part Sub-number.
    ClassB { eic: u16, fpn: u32, fps: u32 },
    /// Class C: Public Operator Code + FPN + FPS.
    ClassC { poc: u16, fpn: u32, fps: u32 },
    /// Class D: GSM Operator code + FPN.
    ClassD { gop: u32, fpn: u32 },
    /// Class E: FIlled List + FPN.
    ClassE { fil: u16, fpn: u32 },
}

impl Ari {
    pub fn class(&self) -> AriClass {
        match self {
            Ari::ClassA { .. } => AriClass::A,
            Ari::ClassB { .. } => AriClass::B,
            Ari::ClassC { .. } => AriClass::C,
            Ari::ClassD { .. } => AriClass::D,
            Ari::ClassE { .. } => AriClass::E,
        }
    }

    /// Length of the ARI in bits.
    pub fn len(&self) -> u8 {
        match self.class() {
            AriClass::A => 36,
            _ => 31,
        }
    }

    /// Parses an ARI from a left-aligned 64-bit value (most significant bit
    /// of the class field at bit 63). Returns the ARI and its bit length.
    pub fn parse(a: u64) -> Option<(Ari, u8)> {
        let ari = match (a >> 61) as u8 {
            0x0 => Ari::ClassA {
                emc: ((a >> 45) & 0xffff) as u16,
                fpn: ((a >> 28) & 0x1ffff) as u32,
            },
            0x1 => Ari::ClassB {
                eic: ((a >> 45) & 0xffff) as u16,
                fpn: ((a >> 40) & 0x1f) as u32,
                fps: ((a >> 33) & 0x7f) as u32,
            },
            0x2 => Ari::ClassC {
                poc: ((a >> 45) & 0xffff) as u16,
                fpn: ((a >> 37) & 0xff) as u32,
                fps: ((a >> 33) & 0xf) as u32,
            },
            0x3 => Ari::ClassD {
                gop: ((a >> 41) & 0xfffff) as u32,
                fpn: ((a >> 33) & 0xff) as u32,
            },
            0x4 => Ari::ClassE {
                fil: ((a >> 45) & 0xffff) as u16,
                fpn: ((a >> 33) & 0xfff) as u32,
            },
            _ => return None,
        };
        let len = ari.len();
        Some((ari, len))
    }

    /// Builds the left-aligned 64-bit representation of the ARI.
    pub fn build(&self) -> u64 {
        let class = (self.class() as u64) << 61;
        match *self {
            Ari::ClassA { emc, fpn } => {
                class | (emc as u64) << 45 | ((fpn as u64) & 0x1ffff) << 28
            }
            Ari::ClassB { eic, fpn, fps } => {
                class
                    | (eic as u64) << 45
                    | ((fpn as u64) & 0x1f) << 40
                    | ((fps as u64) & 0x7f) << 33
            }
            Ari::ClassC { poc, fpn, fps } => {
                class
                    | (poc as u64) << 45
                    | ((fpn as u64) & 0xff) << 37
                    | ((fps as u64) & 0xf) << 33
            }
            Ari::ClassD { gop, fpn } => {
                class | ((gop as u64) & 0xfffff) << 41 | ((fpn as u64) & 0xff) << 33
            }
            Ari::ClassE { fil, fpn } => class | (fil as u64) << 45 | ((fpn as u64) & 0xfff) << 33,
        }
    }
}

/// Portable Access Rights Key: an ARI plus a prefix length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Park {
    pub park: Ari,
    pub pli: u8,
}

/// International Portable Equipment Identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ipei {
    /// Equipment Manufacturer Code (16 bits).
    pub emc: u16,
    /// Portable equipment Serial Number (20 bits).
    pub psn: u32,
}

impl Ipei {
    pub fn new(emc: u16, psn: u32) -> Self {
        Ipei {
            emc,
            psn: psn & 0xfffff,
        }
    }
}

/// International Portable User Identity.
///
/// The 4-bit Portable User identity Type (PUT) selects the layout of the
/// Portable User Number that follows. Type N carries an IPEI; types O and S
/// carry a binary number, encoded here in a fixed 60-bit field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ipui {
    /// Type N: residential/default, PUN is the IPEI.
    N(Ipei),
    /// Type O: private, PUN is a binary number.
    O(u64),
    /// Type S: PSTN/ISDN, PUN is a binary number.
    S(u64),
}

impl Ipui {
    /// The PUT nibble.
    pub fn put(&self) -> u8 {
        match self {
            Ipui::N(_) => 0x0,
            Ipui::O(_) => 0x1,
            Ipui::S(_) => 0x5,
        }
    }

    /// Total length in bits, PUT included. This is the length transmitted
    /// in the PORTABLE-IDENTITY IE.
    pub fn len(&self) -> u8 {
        match self {
            Ipui::N(_) => 40,
            Ipui::O(_) | Ipui::S(_) => 64,
        }
    }

    /// Serializes PUT + PUN, MSB first.
    pub fn build(&self, buf: &mut Vec<u8>) -> u8 {
        match *self {
            Ipui::N(ipei) => {
                let v = ((self.put() as u64) << 36)
                    | ((ipei.emc as u64) << 20)
                    | (ipei.psn as u64 & 0xfffff);
                buf.extend_from_slice(&[
                    (v >> 32) as u8,
                    (v >> 24) as u8,
                    (v >> 16) as u8,
                    (v >> 8) as u8,
                    v as u8,
                ]);
            }
            Ipui::O(n) | Ipui::S(n) => {
                let v = ((self.put() as u64) << 60) | (n & 0x0fff_ffff_ffff_ffff);
                buf.extend_from_slice(&v.to_be_bytes());
            }
        }
        self.len()
    }

    /// Parses PUT + PUN from `data`, which must carry `len` bits.
    pub fn parse(data: &[u8], len: u8) -> Option<Ipui> {
        let put = data.first()? >> 4;
        match put {
            0x0 => {
                if len != 40 || data.len() < 5 {
                    return None;
                }
                let emc = ((data[0] as u16 & 0xf) << 12)
                    | ((data[1] as u16) << 4)
                    | (data[2] as u16 >> 4);
                let psn = ((data[2] as u32 & 0xf) << 16) | ((data[3] as u32) << 8) | data[4] as u32;
                Some(Ipui::N(Ipei { emc, psn }))
            }
            0x1 | 0x5 => {
                if len != 64 || data.len() < 8 {
                    return None;
                }
                let mut b = [0u8; 8];
                b.copy_from_slice(&data[..8]);
                let n = u64::from_be_bytes(b) & 0x0fff_ffff_ffff_ffff;
                if put == 0x1 {
                    Some(Ipui::O(n))
                } else {
                    Some(Ipui::S(n))
                }
            }
            _ => None,
        }
    }
}

/// Temporary Portable User Identity (20 bits).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tpui {
    /// Assigned individual TPUI.
    IndividualAssigned(u32),
    /// Default individual TPUI, derived from the IPUI.
    IndividualDefault(u16),
    /// Call group TPUI.
    CallGroup(u16),
    /// Emergency TPUI.
    Emergency,
}

impl Tpui {
    /// Builds the 20-bit TPUI value.
    pub fn build(&self) -> u32 {
        match *self {
            Tpui::IndividualAssigned(v) => v & 0xfffff,
            Tpui::IndividualDefault(d) => 0xe0000 | d as u32,
            Tpui::CallGroup(g) => 0xd0000 | g as u32,
            Tpui::Emergency => 0xf1112,
        }
    }

    /// Decodes a 20-bit TPUI value.
    pub fn parse(v: u32) -> Tpui {
        let v = v & 0xfffff;
        match v >> 16 {
            0xe => Tpui::IndividualDefault(v as u16),
            0xd => Tpui::CallGroup(v as u16),
            _ if v == 0xf1112 => Tpui::Emergency,
            _ => Tpui::IndividualAssigned(v),
        }
    }
}

/// Derives the default individual TPUI from an IPUI.
pub fn ipui_to_tpui(ipui: &Ipui) -> Tpui {
    match ipui {
        Ipui::N(ipei) => Tpui::IndividualDefault(ipei.psn as u16),
        Ipui::O(n) | Ipui::S(n) => Tpui::IndividualDefault(*n as u16),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ari_class_a_round_trip() {
        let ari = Ari::ClassA {
            emc: 0x0123,
            fpn: 0x1ffff,
        };
        let (parsed, len) = Ari::parse(ari.build()).unwrap();
        assert_eq!(parsed, ari);
        assert_eq!(len, 36);
    }

    #[test]
    fn test_ari_class_b_round_trip() {
        let ari = Ari::ClassB {
            eic: 0xbeef,
            fpn: 0x11,
            fps: 0x55,
        };
        let (parsed, len) = Ari::parse(ari.build()).unwrap();
        assert_eq!(parsed, ari);
        assert_eq!(len, 31);
    }

    #[test]
    fn test_ari_class_d_round_trip() {
        let ari = Ari::ClassD {
            gop: 0xabcde,
            fpn: 0x42,
        };
        let (parsed, _) = Ari::parse(ari.build()).unwrap();
        assert_eq!(parsed, ari);
    }

    #[test]
    fn test_ari_parse_invalid_class() {
        assert!(Ari::parse(0x7u64 << 61).is_none());
    }

    #[test]
    fn test_ipui_n_round_trip() {
        let ipui = Ipui::N(Ipei::new(0x123, 0x456789));
        let mut buf = Vec::new();
        let len = ipui.build(&mut buf);
        assert_eq!(len, 40);
        assert_eq!(buf.len(), 5);
        assert_eq!(Ipui::parse(&buf, len).unwrap(), ipui);
    }

    #[test]
    fn test_ipui_n_wire_layout() {
        let ipui = Ipui::N(Ipei::new(0xffff, 0xfffff));
        let mut buf = Vec::new();
        ipui.build(&mut buf);
        // PUT nibble 0, then 36 bits all-ones.
        assert_eq!(buf, [0x0f, 0xff, 0xff, 0xff, 0xff]);
    }

    #[test]
    fn test_ipui_o_round_trip() {
        let ipui = Ipui::O(0x0123_4567_89ab_cdef);
        let mut buf = Vec::new();
        let len = ipui.build(&mut buf);
        assert_eq!(len, 64);
        assert_eq!(Ipui::parse(&buf, len).unwrap(), ipui);
    }

    #[test]
    fn test_ipui_parse_bad_length() {
        let ipui = Ipui::N(Ipei::new(1, 2));
        let mut buf = Vec::new();
        ipui.build(&mut buf);
        assert!(Ipui::parse(&buf, 32).is_none());
    }

    #[test]
    fn test_tpui_round_trip() {
        for tpui in [
            Tpui::IndividualAssigned(0x12345),
            Tpui::IndividualDefault(0xabcd),
            Tpui::CallGroup(0x1234),
            Tpui::Emergency,
        ] {
            assert_eq!(Tpui::parse(tpui.build()), tpui);
        }
    }

    #[test]
    fn test_default_tpui_from_ipui() {
        let tpui = ipui_to_tpui(&Ipui::N(Ipei::new(0x123, 0x456789)));
        assert_eq!(tpui, Tpui::IndividualDefault(0x6789));
    }
}
