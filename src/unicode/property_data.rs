// property_data.rs - Unicode 14.0.0 property tables.
// Generated by scripts/gen_unicode_tables.pl. Do not edit by hand.

use super::GeneralCategory::{self, *};

pub const UNICODE_VERSION: (u8, u8, u8) = (14, 0, 0);

/// Assigned code point ranges and their general category. Gaps are `Cn`.
pub(crate) static GENERAL_CATEGORY_TABLE: &[(u32, u32, GeneralCategory)] = &[
    (0x0000, 0x001F, Cc), (0x0020, 0x0020, Zs), (0x0021, 0x0023, Po),
    (0x0024, 0x0024, Sc), (0x0025, 0x0027, Po), (0x0028, 0x0028, Ps),
    (0x0029, 0x0029, Pe), (0x002A, 0x002A, Po), (0x002B, 0x002B, Sm),
    (0x002C, 0x002C, Po), (0x002D, 0x002D, Pd), (0x002E, 0x002F, Po),
    (0x0030, 0x0039, Nd), (0x003A, 0x003B, Po), (0x003C, 0x003E, Sm),
    (0x003F, 0x0040, Po), (0x0041, 0x005A, Lu), (0x005B, 0x005B, Ps),
    (0x005C, 0x005C, Po), (0x005D, 0x005D, Pe), (0x005E, 0x005E, Sk),
    (0x005F, 0x005F, Pc), (0x0060, 0x0060, Sk), (0x0061, 0x007A, Ll),
    (0x007B, 0x007B, Ps), (0x007C, 0x007C, Sm), (0x007D, 0x007D, Pe),
    (0x007E, 0x007E, Sm), (0x007F, 0x009F, Cc), (0x00A0, 0x00A0, Zs),
    (0x00A1, 0x00A1, Po), (0x00A2, 0x00A5, Sc), (0x00A6, 0x00A6, So),
    (0x00A7, 0x00A7, Po), (0x00A8, 0x00A8, Sk), (0x00A9, 0x00A9, So),
    (0x00AA, 0x00AA, Lo), (0x00AB, 0x00AB, Pi), (0x00AC, 0x00AC, Sm),
    (0x00AD, 0x00AD, Cf), (0x00AE, 0x00AE, So), (0x00AF, 0x00AF, Sk),
    (0x00B0, 0x00B0, So), (0x00B1, 0x00B1, Sm), (0x00B2, 0x00B3, No),
    (0x00B4, 0x00B4, Sk), (0x00B5, 0x00B5, Ll), (0x00B6, 0x00B7, Po),
    (0x00B8, 0x00B8, Sk), (0x00B9, 0x00B9, No), (0x00BA, 0x00BA, Lo),
    (0x00BB, 0x00BB, Pf), (0x00BC, 0x00BE, No), (0x00BF, 0x00BF, Po),
    (0x00C0, 0x00D6, Lu), (0x00D7, 0x00D7, Sm), (0x00D8, 0x00DE, Lu),
    (0x00DF, 0x00F6, Ll), (0x00F7, 0x00F7, Sm), (0x00F8, 0x00FF, Ll),
    (0x0100, 0x0100, Lu), (0x0101, 0x0101, Ll), (0x0102, 0x0102, Lu),
    (0x0103, 0x0103, Ll), (0x0104, 0x0104, Lu), (0x0105, 0x0105, Ll),
    (0x0106, 0x0106, Lu), (0x0107, 0x0107, Ll), (0x0108, 0x0108, Lu),
    (0x0109, 0x0109, Ll), (0x010A, 0x010A, Lu), (0x010B, 0x010B, Ll),
    (0x010C, 0x010C, Lu), (0x010D, 0x010D, Ll), (0x010E, 0x010E, Lu),
    (0x010F, 0x010F, Ll), (0x0110, 0x0110, Lu), (0x0111, 0x0111, Ll),
    (0x0112, 0x0112, Lu), (0x0113, 0x0113, Ll), (0x0114, 0x0114, Lu),
    (0x0115, 0x0115, Ll), (0x0116, 0x0116, Lu), (0x0117, 0x0117, Ll),
    (0x0118, 0x0118, Lu), (0x0119, 0x0119, Ll), (0x011A, 0x011A, Lu),
    (0x011B, 0x011B, Ll), (0x011C, 0x011C, Lu), (0x011D, 0x011D, Ll),
    (0x011E, 0x011E, Lu), (0x011F, 0x011F, Ll), (0x0120, 0x0120, Lu),
    (0x0121, 0x0121, Ll), (0x0122, 0x0122, Lu), (0x0123, 0x0123, Ll),
    (0x0124, 0x0124, Lu), (0x0125, 0x0125, Ll), (0x0126, 0x0126, Lu),
    (0x0127, 0x0127, Ll), (0x0128, 0x0128, Lu), (0x0129, 0x0129, Ll),
    (0x012A, 0x012A, Lu), (0x012B, 0x012B, Ll), (0x012C, 0x012C, Lu),
    (0x012D, 0x012D, Ll), (0x012E, 0x012E, Lu), (0x012F, 0x012F, Ll),
    (0x0130, 0x0130, Lu), (0x0131, 0x0131, Ll), (0x0132, 0x0132, Lu),
    (0x0133, 0x0133, Ll), (0x0134, 0x0134, Lu), (0x0135, 0x0135, Ll),
    (0x0136, 0x0136, Lu), (0x0137, 0x0138, Ll), (0x0139, 0x0139, Lu),
    (0x013A, 0x013A, Ll), (0x013B, 0x013B, Lu), (0x013C, 0x013C, Ll),
    (0x013D, 0x013D, Lu), (0x013E, 0x013E, Ll), (0x013F, 0x013F, Lu),
    (0x0140, 0x0140, Ll), (0x0141, 0x0141, Lu), (0x0142, 0x0142, Ll),
    (0x0143, 0x0143, Lu), (0x0144, 0x0144, Ll), (0x0145, 0x0145, Lu),
    (0x0146, 0x0146, Ll), (0x0147, 0x0147, Lu), (0x0148, 0x0149, Ll),
    (0x014A, 0x014A, Lu), (0x014B, 0x014B, Ll), (0x014C, 0x014C, Lu),
    (0x014D, 0x014D, Ll), (0x014E, 0x014E, Lu), (0x014F, 0x014F, Ll),
    (0x0150, 0x0150, Lu), (0x0151, 0x0151, Ll), (0x0152, 0x0152, Lu),
    (0x0153, 0x0153, Ll), (0x0154, 0x0154, Lu), (0x0155, 0x0155, Ll),
    (0x0156, 0x0156, Lu), (0x0157, 0x0157, Ll), (0x0158, 0x0158, Lu),
    (0x0159, 0x0159, Ll), (0x015A, 0x015A, Lu), (0x015B, 0x015B, Ll),
    (0x015C, 0x015C, Lu), (0x015D, 0x015D, Ll), (0x015E, 0x015E, Lu),
    (0x015F, 0x015F, Ll), (0x0160, 0x0160, Lu), (0x0161, 0x0161, Ll),
    (0x0162, 0x0162, Lu), (0x0163, 0x0163, Ll), (0x0164, 0x0164, Lu),
    (0x0165, 0x0165, Ll), (0x0166, 0x0166, Lu), (0x0167, 0x0167, Ll),
    (0x0168, 0x0168, Lu), (0x0169, 0x0169, Ll), (0x016A, 0x016A, Lu),
    (0x016B, 0x016B, Ll), (0x016C, 0x016C, Lu), (0x016D, 0x016D, Ll),
    (0x016E, 0x016E, Lu), (0x016F, 0x016F, Ll), (0x0170, 0x0170, Lu),
    (0x0171, 0x0171, Ll), (0x0172, 0x0172, Lu), (0x0173, 0x0173, Ll),
    (0x0174, 0x0174, Lu), (0x0175, 0x0175, Ll), (0x0176, 0x0176, Lu),
    (0x0177, 0x0177, Ll), (0x0178, 0x0179, Lu), (0x017A, 0x017A, Ll),
    (0x017B, 0x017B, Lu), (0x017C, 0x017C, Ll), (0x017D, 0x017D, Lu),
    (0x017E, 0x0180, Ll), (0x0181, 0x0182, Lu), (0x0183, 0x0183, Ll),
    (0x0184, 0x0184, Lu), (0x0185, 0x0185, Ll), (0x0186, 0x0187, Lu),
    (0x0188, 0x0188, Ll), (0x0189, 0x018B, Lu), (0x018C, 0x018D, Ll),
    (0x018E, 0x0191, Lu), (0x0192, 0x0192, Ll), (0x0193, 0x0194, Lu),
    (0x0195, 0x0195, Ll), (0x0196, 0x0198, Lu), (0x0199, 0x019B, Ll),
    (0x019C, 0x019D, Lu), (0x019E, 0x019E, Ll), (0x019F, 0x01A0, Lu),
    (0x01A1, 0x01A1, Ll), (0x01A2, 0x01A2, Lu), (0x01A3, 0x01A3, Ll),
    (0x01A4, 0x01A4, Lu), (0x01A5, 0x01A5, Ll), (0x01A6, 0x01A7, Lu),
    (0x01A8, 0x01A8, Ll), (0x01A9, 0x01A9, Lu), (0x01AA, 0x01AB, Ll),
    (0x01AC, 0x01AC, Lu), (0x01AD, 0x01AD, Ll), (0x01AE, 0x01AF, Lu),
    (0x01B0, 0x01B0, Ll), (0x01B1, 0x01B3, Lu), (0x01B4, 0x01B4, Ll),
    (0x01B5, 0x01B5, Lu), (0x01B6, 0x01B6, Ll), (0x01B7, 0x01B8, Lu),
    (0x01B9, 0x01BA, Ll), (0x01BB, 0x01BB, Lo), (0x01BC, 0x01BC, Lu),
    (0x01BD, 0x01BF, Ll), (0x01C0, 0x01C3, Lo), (0x01C4, 0x01C4, Lu),
    (0x01C5, 0x01C5, Lt), (0x01C6, 0x01C6, Ll), (0x01C7, 0x01C7, Lu),
    (0x01C8, 0x01C8, Lt), (0x01C9, 0x01C9, Ll), (0x01CA, 0x01CA, Lu),
    (0x01CB, 0x01CB, Lt), (0x01CC, 0x01CC, Ll), (0x01CD, 0x01CD, Lu),
    (0x01CE, 0x01CE, Ll), (0x01CF, 0x01CF, Lu), (0x01D0, 0x01D0, Ll),
    (0x01D1, 0x01D1, Lu), (0x01D2, 0x01D2, Ll), (0x01D3, 0x01D3, Lu),
    (0x01D4, 0x01D4, Ll), (0x01D5, 0x01D5, Lu), (0x01D6, 0x01D6, Ll),
    (0x01D7, 0x01D7, Lu), (0x01D8, 0x01D8, Ll), (0x01D9, 0x01D9, Lu),
    (0x01DA, 0x01DA, Ll), (0x01DB, 0x01DB, Lu), (0x01DC, 0x01DD, Ll),
    (0x01DE, 0x01DE, Lu), (0x01DF, 0x01DF, Ll), (0x01E0, 0x01E0, Lu),
    (0x01E1, 0x01E1, Ll), (0x01E2, 0x01E2, Lu), (0x01E3, 0x01E3, Ll),
    (0x01E4, 0x01E4, Lu), (0x01E5, 0x01E5, Ll), (0x01E6, 0x01E6, Lu),
    (0x01E7, 0x01E7, Ll), (0x01E8, 0x01E8, Lu), (0x01E9, 0x01E9, Ll),
    (0x01EA, 0x01EA, Lu), (0x01EB, 0x01EB, Ll), (0x01EC, 0x01EC, Lu),
    (0x01ED, 0x01ED, Ll), (0x01EE, 0x01EE, Lu), (0x01EF, 0x01F0, Ll),
    (0x01F1, 0x01F1, Lu), (0x01F2, 0x01F2, Lt), (0x01F3, 0x01F3, Ll),
    (0x01F4, 0x01F4, Lu), (0x01F5, 0x01F5, Ll), (0x01F6, 0x01F8, Lu),
    (0x01F9, 0x01F9, Ll), (0x01FA, 0x01FA, Lu), (0x01FB, 0x01FB, Ll),
    (0x01FC, 0x01FC, Lu), (0x01FD, 0x01FD, Ll), (0x01FE, 0x01FE, Lu),
    (0x01FF, 0x01FF, Ll), (0x0200, 0x0200, Lu), (0x0201, 0x0201, Ll),
    (0x0202, 0x0202, Lu), (0x0203, 0x0203, Ll), (0x0204, 0x0204, Lu),
    (0x0205, 0x0205, Ll), (0x0206, 0x0206, Lu), (0x0207, 0x0207, Ll),
    (0x0208, 0x0208, Lu), (0x0209, 0x0209, Ll), (0x020A, 0x020A, Lu),
    (0x020B, 0x020B, Ll), (0x020C, 0x020C, Lu), (0x020D, 0x020D, Ll),
    (0x020E, 0x020E, Lu), (0x020F, 0x020F, Ll), (0x0210, 0x0210, Lu),
    (0x0211, 0x0211, Ll), (0x0212, 0x0212, Lu), (0x0213, 0x0213, Ll),
    (0x0214, 0x0214, Lu), (0x0215, 0x0215, Ll), (0x0216, 0x0216, Lu),
    (0x0217, 0x0217, Ll), (0x0218, 0x0218, Lu), (0x0219, 0x0219, Ll),
    (0x021A, 0x021A, Lu), (0x021B, 0x021B, Ll), (0x021C, 0x021C, Lu),
    (0x021D, 0x021D, Ll), (0x021E, 0x021E, Lu), (0x021F, 0x021F, Ll),
    (0x0220, 0x0220, Lu), (0x0221, 0x0221, Ll), (0x0222, 0x0222, Lu),
    (0x0223, 0x0223, Ll), (0x0224, 0x0224, Lu), (0x0225, 0x0225, Ll),
    (0x0226, 0x0226, Lu), (0x0227, 0x0227, Ll), (0x0228, 0x0228, Lu),
    (0x0229, 0x0229, Ll), (0x022A, 0x022A, Lu), (0x022B, 0x022B, Ll),
    (0x022C, 0x022C, Lu), (0x022D, 0x022D, Ll), (0x022E, 0x022E, Lu),
    (0x022F, 0x022F, Ll), (0x0230, 0x0230, Lu), (0x0231, 0x0231, Ll),
    (0x0232, 0x0232, Lu), (0x0233, 0x0239, Ll), (0x023A, 0x023B, Lu),
    (0x023C, 0x023C, Ll), (0x023D, 0x023E, Lu), (0x023F, 0x0240, Ll),
    (0x0241, 0x0241, Lu), (0x0242, 0x0242, Ll), (0x0243, 0x0246, Lu),
    (0x0247, 0x0247, Ll), (0x0248, 0x0248, Lu), (0x0249, 0x0249, Ll),
    (0x024A, 0x024A, Lu), (0x024B, 0x024B, Ll), (0x024C, 0x024C, Lu),
    (0x024D, 0x024D, Ll), (0x024E, 0x024E, Lu), (0x024F, 0x0293, Ll),
    (0x0294, 0x0294, Lo), (0x0295, 0x02AF, Ll), (0x02B0, 0x02C1, Lm),
    (0x02C2, 0x02C5, Sk), (0x02C6, 0x02D1, Lm), (0x02D2, 0x02DF, Sk),
    (0x02E0, 0x02E4, Lm), (0x02E5, 0x02EB, Sk), (0x02EC, 0x02EC, Lm),
    (0x02ED, 0x02ED, Sk), (0x02EE, 0x02EE, Lm), (0x02EF, 0x02FF, Sk),
    (0x0300, 0x036F, Mn), (0x0370, 0x0370, Lu), (0x0371, 0x0371, Ll),
    (0x0372, 0x0372, Lu), (0x0373, 0x0373, Ll), (0x0374, 0x0374, Lm),
    (0x0375, 0x0375, Sk), (0x0376, 0x0376, Lu), (0x0377, 0x0377, Ll),
    (0x037A, 0x037A, Lm), (0x037B, 0x037D, Ll), (0x037E, 0x037E, Po),
    (0x037F, 0x037F, Lu), (0x0384, 0x0385, Sk), (0x0386, 0x0386, Lu),
    (0x0387, 0x0387, Po), (0x0388, 0x038A, Lu), (0x038C, 0x038C, Lu),
    (0x038E, 0x038F, Lu), (0x0390, 0x0390, Ll), (0x0391, 0x03A1, Lu),
    (0x03A3, 0x03AB, Lu), (0x03AC, 0x03CE, Ll), (0x03CF, 0x03CF, Lu),
    (0x03D0, 0x03D1, Ll), (0x03D2, 0x03D4, Lu), (0x03D5, 0x03D7, Ll),
    (0x03D8, 0x03D8, Lu), (0x03D9, 0x03D9, Ll), (0x03DA, 0x03DA, Lu),
    (0x03DB, 0x03DB, Ll), (0x03DC, 0x03DC, Lu), (0x03DD, 0x03DD, Ll),
    (0x03DE, 0x03DE, Lu), (0x03DF, 0x03DF, Ll), (0x03E0, 0x03E0, Lu),
    (0x03E1, 0x03E1, Ll), (0x03E2, 0x03E2, Lu), (0x03E3, 0x03E3, Ll),
    (0x03E4, 0x03E4, Lu), (0x03E5, 0x03E5, Ll), (0x03E6, 0x03E6, Lu),
    (0x03E7, 0x03E7, Ll), (0x03E8, 0x03E8, Lu), (0x03E9, 0x03E9, Ll),
    (0x03EA, 0x03EA, Lu), (0x03EB, 0x03EB, Ll), (0x03EC, 0x03EC, Lu),
    (0x03ED, 0x03ED, Ll), (0x03EE, 0x03EE, Lu), (0x03EF, 0x03F3, Ll),
    (0x03F4, 0x03F4, Lu), (0x03F5, 0x03F5, Ll), (0x03F6, 0x03F6, Sm),
    (0x03F7, 0x03F7, Lu), (0x03F8, 0x03F8, Ll), (0x03F9, 0x03FA, Lu),
    (0x03FB, 0x03FC, Ll), (0x03FD, 0x042F, Lu), (0x0430, 0x045F, Ll),
    (0x0460, 0x0460, Lu), (0x0461, 0x0461, Ll), (0x0462, 0x0462, Lu),
    (0x0463, 0x0463, Ll), (0x0464, 0x0464, Lu), (0x0465, 0x0465, Ll),
    (0x0466, 0x0466, Lu), (0x0467, 0x0467, Ll), (0x0468, 0x0468, Lu),
    (0x0469, 0x0469, Ll), (0x046A, 0x046A, Lu), (0x046B, 0x046B, Ll),
    (0x046C, 0x046C, Lu), (0x046D, 0x046D, Ll), (0x046E, 0x046E, Lu),
    (0x046F, 0x046F, Ll), (0x0470, 0x0470, Lu), (0x0471, 0x0471, Ll),
    (0x0472, 0x0472, Lu), (0x0473, 0x0473, Ll), (0x0474, 0x0474, Lu),
    (0x0475, 0x0475, Ll), (0x0476, 0x0476, Lu), (0x0477, 0x0477, Ll),
    (0x0478, 0x0478, Lu), (0x0479, 0x0479, Ll), (0x047A, 0x047A, Lu),
    (0x047B, 0x047B, Ll), (0x047C, 0x047C, Lu), (0x047D, 0x047D, Ll),
    (0x047E, 0x047E, Lu), (0x047F, 0x047F, Ll), (0x0480, 0x0480, Lu),
    (0x0481, 0x0481, Ll), (0x0482, 0x0482, So), (0x0483, 0x0487, Mn),
    (0x0488, 0x0489, Me), (0x048A, 0x048A, Lu), (0x048B, 0x048B, Ll),
    (0x048C, 0x048C, Lu), (0x048D, 0x048D, Ll), (0x048E, 0x048E, Lu),
    (0x048F, 0x048F, Ll), (0x0490, 0x0490, Lu), (0x0491, 0x0491, Ll),
    (0x0492, 0x0492, Lu), (0x0493, 0x0493, Ll), (0x0494, 0x0494, Lu),
    (0x0495, 0x0495, Ll), (0x0496, 0x0496, Lu), (0x0497, 0x0497, Ll),
    (0x0498, 0x0498, Lu), (0x0499, 0x0499, Ll), (0x049A, 0x049A, Lu),
    (0x049B, 0x049B, Ll), (0x049C, 0x049C, Lu), (0x049D, 0x049D, Ll),
    (0x049E, 0x049E, Lu), (0x049F, 0x049F, Ll), (0x04A0, 0x04A0, Lu),
    (0x04A1, 0x04A1, Ll), (0x04A2, 0x04A2, Lu), (0x04A3, 0x04A3, Ll),
    (0x04A4, 0x04A4, Lu), (0x04A5, 0x04A5, Ll), (0x04A6, 0x04A6, Lu),
    (0x04A7, 0x04A7, Ll), (0x04A8, 0x04A8, Lu), (0x04A9, 0x04A9, Ll),
    (0x04AA, 0x04AA, Lu), (0x04AB, 0x04AB, Ll), (0x04AC, 0x04AC, Lu),
    (0x04AD, 0x04AD, Ll), (0x04AE, 0x04AE, Lu), (0x04AF, 0x04AF, Ll),
    (0x04B0, 0x04B0, Lu), (0x04B1, 0x04B1, Ll), (0x04B2, 0x04B2, Lu),
    (0x04B3, 0x04B3, Ll), (0x04B4, 0x04B4, Lu), (0x04B5, 0x04B5, Ll),
    (0x04B6, 0x04B6, Lu), (0x04B7, 0x04B7, Ll), (0x04B8, 0x04B8, Lu),
    (0x04B9, 0x04B9, Ll), (0x04BA, 0x04BA, Lu), (0x04BB, 0x04BB, Ll),
    (0x04BC, 0x04BC, Lu), (0x04BD, 0x04BD, Ll), (0x04BE, 0x04BE, Lu),
    (0x04BF, 0x04BF, Ll), (0x04C0, 0x04C1, Lu), (0x04C2, 0x04C2, Ll),
    (0x04C3, 0x04C3, Lu), (0x04C4, 0x04C4, Ll), (0x04C5, 0x04C5, Lu),
    (0x04C6, 0x04C6, Ll), (0x04C7, 0x04C7, Lu), (0x04C8, 0x04C8, Ll),
    (0x04C9, 0x04C9, Lu), (0x04CA, 0x04CA, Ll), (0x04CB, 0x04CB, Lu),
    (0x04CC, 0x04CC, Ll), (0x04CD, 0x04CD, Lu), (0x04CE, 0x04CF, Ll),
    (0x04D0, 0x04D0, Lu), (0x04D1, 0x04D1, Ll), (0x04D2, 0x04D2, Lu),
    (0x04D3, 0x04D3, Ll), (0x04D4, 0x04D4, Lu), (0x04D5, 0x04D5, Ll),
    (0x04D6, 0x04D6, Lu), (0x04D7, 0x04D7, Ll), (0x04D8, 0x04D8, Lu),
    (0x04D9, 0x04D9, Ll), (0x04DA, 0x04DA, Lu), (0x04DB, 0x04DB, Ll),
    (0x04DC, 0x04DC, Lu), (0x04DD, 0x04DD, Ll), (0x04DE, 0x04DE, Lu),
    (0x04DF, 0x04DF, Ll), (0x04E0, 0x04E0, Lu), (0x04E1, 0x04E1, Ll),
    (0x04E2, 0x04E2, Lu), (0x04E3, 0x04E3, Ll), (0x04E4, 0x04E4, Lu),
    (0x04E5, 0x04E5, Ll), (0x04E6, 0x04E6, Lu), (0x04E7, 0x04E7, Ll),
    (0x04E8, 0x04E8, Lu), (0x04E9, 0x04E9, Ll), (0x04EA, 0x04EA, Lu),
    (0x04EB, 0x04EB, Ll), (0x04EC, 0x04EC, Lu), (0x04ED, 0x04ED, Ll),
    (0x04EE, 0x04EE, Lu), (0x04EF, 0x04EF, Ll), (0x04F0, 0x04F0, Lu),
    (0x04F1, 0x04F1, Ll), (0x04F2, 0x04F2, Lu), (0x04F3, 0x04F3, Ll),
    (0x04F4, 0x04F4, Lu), (0x04F5, 0x04F5, Ll), (0x04F6, 0x04F6, Lu),
    (0x04F7, 0x04F7, Ll), (0x04F8, 0x04F8, Lu), (0x04F9, 0x04F9, Ll),
    (0x04FA, 0x04FA, Lu), (0x04FB, 0x04FB, Ll), (0x04FC, 0x04FC, Lu),
    (0x04FD, 0x04FD, Ll), (0x04FE, 0x04FE, Lu), (0x04FF, 0x04FF, Ll),
    (0x0500, 0x0500, Lu), (0x0501, 0x0501, Ll), (0x0502, 0x0502, Lu),
    (0x0503, 0x0503, Ll), (0x0504, 0x0504, Lu), (0x0505, 0x0505, Ll),
    (0x0506, 0x0506, Lu), (0x0507, 0x0507, Ll), (0x0508, 0x0508, Lu),
    (0x0509, 0x0509, Ll), (0x050A, 0x050A, Lu), (0x050B, 0x050B, Ll),
    (0x050C, 0x050C, Lu), (0x050D, 0x050D, Ll), (0x050E, 0x050E, Lu),
    (0x050F, 0x050F, Ll), (0x0510, 0x0510, Lu), (0x0511, 0x0511, Ll),
    (0x0512, 0x0512, Lu), (0x0513, 0x0513, Ll), (0x0514, 0x0514, Lu),
    (0x0515, 0x0515, Ll), (0x0516, 0x0516, Lu), (0x0517, 0x0517, Ll),
    (0x0518, 0x0518, Lu), (0x0519, 0x0519, Ll), (0x051A, 0x051A, Lu),
    (0x051B, 0x051B, Ll), (0x051C, 0x051C, Lu), (0x051D, 0x051D, Ll),
    (0x051E, 0x051E, Lu), (0x051F, 0x051F, Ll), (0x0520, 0x0520, Lu),
    (0x0521, 0x0521, Ll), (0x0522, 0x0522, Lu), (0x0523, 0x0523, Ll),
    (0x0524, 0x0524, Lu), (0x0525, 0x0525, Ll), (0x0526, 0x0526, Lu),
    (0x0527, 0x0527, Ll), (0x0528, 0x0528, Lu), (0x0529, 0x0529, Ll),
    (0x052A, 0x052A, Lu), (0x052B, 0x052B, Ll), (0x052C, 0x052C, Lu),
    (0x052D, 0x052D, Ll), (0x052E, 0x052E, Lu), (0x052F, 0x052F, Ll),
    (0x0531, 0x0556, Lu), (0x0559, 0x0559, Lm), (0x055A, 0x055F, Po),
    (0x0560, 0x0588, Ll), (0x0589, 0x0589, Po), (0x058A, 0x058A, Pd),
    (0x058D, 0x058E, So), (0x058F, 0x058F, Sc), (0x0591, 0x05BD, Mn),
    (0x05BE, 0x05BE, Pd), (0x05BF, 0x05BF, Mn), (0x05C0, 0x05C0, Po),
    (0x05C1, 0x05C2, Mn), (0x05C3, 0x05C3, Po), (0x05C4, 0x05C5, Mn),
    (0x05C6, 0x05C6, Po), (0x05C7, 0x05C7, Mn), (0x05D0, 0x05EA, Lo),
    (0x05EF, 0x05F2, Lo), (0x05F3, 0x05F4, Po), (0x0600, 0x0605, Cf),
    (0x0606, 0x0608, Sm), (0x0609, 0x060A, Po), (0x060B, 0x060B, Sc),
    (0x060C, 0x060D, Po), (0x060E, 0x060F, So), (0x0610, 0x061A, Mn),
    (0x061B, 0x061B, Po), (0x061C, 0x061C, Cf), (0x061D, 0x061F, Po),
    (0x0620, 0x063F, Lo), (0x0640, 0x0640, Lm), (0x0641, 0x064A, Lo),
    (0x064B, 0x065F, Mn), (0x0660, 0x0669, Nd), (0x066A, 0x066D, Po),
    (0x066E, 0x066F, Lo), (0x0670, 0x0670, Mn), (0x0671, 0x06D3, Lo),
    (0x06D4, 0x06D4, Po), (0x06D5, 0x06D5, Lo), (0x06D6, 0x06DC, Mn),
    (0x06DD, 0x06DD, Cf), (0x06DE, 0x06DE, So), (0x06DF, 0x06E4, Mn),
    (0x06E5, 0x06E6, Lm), (0x06E7, 0x06E8, Mn), (0x06E9, 0x06E9, So),
    (0x06EA, 0x06ED, Mn), (0x06EE, 0x06EF, Lo), (0x06F0, 0x06F9, Nd),
    (0x06FA, 0x06FC, Lo), (0x06FD, 0x06FE, So), (0x06FF, 0x06FF, Lo),
    (0x0700, 0x070D, Po), (0x070F, 0x070F, Cf), (0x0710, 0x0710, Lo),
    (0x0711, 0x0711, Mn), (0x0712, 0x072F, Lo), (0x0730, 0x074A, Mn),
    (0x074D, 0x07A5, Lo), (0x07A6, 0x07B0, Mn), (0x07B1, 0x07B1, Lo),
    (0x07C0, 0x07C9, Nd), (0x07CA, 0x07EA, Lo), (0x07EB, 0x07F3, Mn),
    (0x07F4, 0x07F5, Lm), (0x07F6, 0x07F6, So), (0x07F7, 0x07F9, Po),
    (0x07FA, 0x07FA, Lm), (0x07FD, 0x07FD, Mn), (0x07FE, 0x07FF, Sc),
    (0x0800, 0x0815, Lo), (0x0816, 0x0819, Mn), (0x081A, 0x081A, Lm),
    (0x081B, 0x0823, Mn), (0x0824, 0x0824, Lm), (0x0825, 0x0827, Mn),
    (0x0828, 0x0828, Lm), (0x0829, 0x082D, Mn), (0x0830, 0x083E, Po),
    (0x0840, 0x0858, Lo), (0x0859, 0x085B, Mn), (0x085E, 0x085E, Po),
    (0x0860, 0x086A, Lo), (0x0870, 0x0887, Lo), (0x0888, 0x0888, Sk),
    (0x0889, 0x088E, Lo), (0x0890, 0x0891, Cf), (0x0898, 0x089F, Mn),
    (0x08A0, 0x08C8, Lo), (0x08C9, 0x08C9, Lm), (0x08CA, 0x08E1, Mn),
    (0x08E2, 0x08E2, Cf), (0x08E3, 0x0902, Mn), (0x0903, 0x0903, Mc),
    (0x0904, 0x0939, Lo), (0x093A, 0x093A, Mn), (0x093B, 0x093B, Mc),
    (0x093C, 0x093C, Mn), (0x093D, 0x093D, Lo), (0x093E, 0x0940, Mc),
    (0x0941, 0x0948, Mn), (0x0949, 0x094C, Mc), (0x094D, 0x094D, Mn),
    (0x094E, 0x094F, Mc), (0x0950, 0x0950, Lo), (0x0951, 0x0957, Mn),
    (0x0958, 0x0961, Lo), (0x0962, 0x0963, Mn), (0x0964, 0x0965, Po),
    (0x0966, 0x096F, Nd), (0x0970, 0x0970, Po), (0x0971, 0x0971, Lm),
    (0x0972, 0x0980, Lo), (0x0981, 0x0981, Mn), (0x0982, 0x0983, Mc),
    (0x0985, 0x098C, Lo), (0x098F, 0x0990, Lo), (0x0993, 0x09A8, Lo),
    (0x09AA, 0x09B0, Lo), (0x09B2, 0x09B2, Lo), (0x09B6, 0x09B9, Lo),
    (0x09BC, 0x09BC, Mn), (0x09BD, 0x09BD, Lo), (0x09BE, 0x09C0, Mc),
    (0x09C1, 0x09C4, Mn), (0x09C7, 0x09C8, Mc), (0x09CB, 0x09CC, Mc),
    (0x09CD, 0x09CD, Mn), (0x09CE, 0x09CE, Lo), (0x09D7, 0x09D7, Mc),
    (0x09DC, 0x09DD, Lo), (0x09DF, 0x09E1, Lo), (0x09E2, 0x09E3, Mn),
    (0x09E6, 0x09EF, Nd), (0x09F0, 0x09F1, Lo), (0x09F2, 0x09F3, Sc),
    (0x09F4, 0x09F9, No), (0x09FA, 0x09FA, So), (0x09FB, 0x09FB, Sc),
    (0x09FC, 0x09FC, Lo), (0x09FD, 0x09FD, Po), (0x09FE, 0x09FE, Mn),
    (0x0A01, 0x0A02, Mn), (0x0A03, 0x0A03, Mc), (0x0A05, 0x0A0A, Lo),
    (0x0A0F, 0x0A10, Lo), (0x0A13, 0x0A28, Lo), (0x0A2A, 0x0A30, Lo),
    (0x0A32, 0x0A33, Lo), (0x0A35, 0x0A36, Lo), (0x0A38, 0x0A39, Lo),
    (0x0A3C, 0x0A3C, Mn), (0x0A3E, 0x0A40, Mc), (0x0A41, 0x0A42, Mn),
    (0x0A47, 0x0A48, Mn), (0x0A4B, 0x0A4D, Mn), (0x0A51, 0x0A51, Mn),
    (0x0A59, 0x0A5C, Lo), (0x0A5E, 0x0A5E, Lo), (0x0A66, 0x0A6F, Nd),
    (0x0A70, 0x0A71, Mn), (0x0A72, 0x0A74, Lo), (0x0A75, 0x0A75, Mn),
    (0x0A76, 0x0A76, Po), (0x0A81, 0x0A82, Mn), (0x0A83, 0x0A83, Mc),
    (0x0A85, 0x0A8D, Lo), (0x0A8F, 0x0A91, Lo), (0x0A93, 0x0AA8, Lo),
    (0x0AAA, 0x0AB0, Lo), (0x0AB2, 0x0AB3, Lo), (0x0AB5, 0x0AB9, Lo),
    (0x0ABC, 0x0ABC, Mn), (0x0ABD, 0x0ABD, Lo), (0x0ABE, 0x0AC0, Mc),
    (0x0AC1, 0x0AC5, Mn), (0x0AC7, 0x0AC8, Mn), (0x0AC9, 0x0AC9, Mc),
    (0x0ACB, 0x0ACC, Mc), (0x0ACD, 0x0ACD, Mn), (0x0AD0, 0x0AD0, Lo),
    (0x0AE0, 0x0AE1, Lo), (0x0AE2, 0x0AE3, Mn), (0x0AE6, 0x0AEF, Nd),
    (0x0AF0, 0x0AF0, Po), (0x0AF1, 0x0AF1, Sc), (0x0AF9, 0x0AF9, Lo),
    (0x0AFA, 0x0AFF, Mn), (0x0B01, 0x0B01, Mn), (0x0B02, 0x0B03, Mc),
    (0x0B05, 0x0B0C, Lo), (0x0B0F, 0x0B10, Lo), (0x0B13, 0x0B28, Lo),
    (0x0B2A, 0x0B30, Lo), (0x0B32, 0x0B33, Lo), (0x0B35, 0x0B39, Lo),
    (0x0B3C, 0x0B3C, Mn), (0x0B3D, 0x0B3D, Lo), (0x0B3E, 0x0B3E, Mc),
    (0x0B3F, 0x0B3F, Mn), (0x0B40, 0x0B40, Mc), (0x0B41, 0x0B44, Mn),
    (0x0B47, 0x0B48, Mc), (0x0B4B, 0x0B4C, Mc), (0x0B4D, 0x0B4D, Mn),
    (0x0B55, 0x0B56, Mn), (0x0B57, 0x0B57, Mc), (0x0B5C, 0x0B5D, Lo),
    (0x0B5F, 0x0B61, Lo), (0x0B62, 0x0B63, Mn), (0x0B66, 0x0B6F, Nd),
    (0x0B70, 0x0B70, So), (0x0B71, 0x0B71, Lo), (0x0B72, 0x0B77, No),
    (0x0B82, 0x0B82, Mn), (0x0B83, 0x0B83, Lo), (0x0B85, 0x0B8A, Lo),
    (0x0B8E, 0x0B90, Lo), (0x0B92, 0x0B95, Lo), (0x0B99, 0x0B9A, Lo),
    (0x0B9C, 0x0B9C, Lo), (0x0B9E, 0x0B9F, Lo), (0x0BA3, 0x0BA4, Lo),
    (0x0BA8, 0x0BAA, Lo), (0x0BAE, 0x0BB9, Lo), (0x0BBE, 0x0BBF, Mc),
    (0x0BC0, 0x0BC0, Mn), (0x0BC1, 0x0BC2, Mc), (0x0BC6, 0x0BC8, Mc),
    (0x0BCA, 0x0BCC, Mc), (0x0BCD, 0x0BCD, Mn), (0x0BD0, 0x0BD0, Lo),
    (0x0BD7, 0x0BD7, Mc), (0x0BE6, 0x0BEF, Nd), (0x0BF0, 0x0BF2, No),
    (0x0BF3, 0x0BF8, So), (0x0BF9, 0x0BF9, Sc), (0x0BFA, 0x0BFA, So),
    (0x0C00, 0x0C00, Mn), (0x0C01, 0x0C03, Mc), (0x0C04, 0x0C04, Mn),
    (0x0C05, 0x0C0C, Lo), (0x0C0E, 0x0C10, Lo), (0x0C12, 0x0C28, Lo),
    (0x0C2A, 0x0C39, Lo), (0x0C3C, 0x0C3C, Mn), (0x0C3D, 0x0C3D, Lo),
    (0x0C3E, 0x0C40, Mn), (0x0C41, 0x0C44, Mc), (0x0C46, 0x0C48, Mn),
    (0x0C4A, 0x0C4D, Mn), (0x0C55, 0x0C56, Mn), (0x0C58, 0x0C5A, Lo),
    (0x0C5D, 0x0C5D, Lo), (0x0C60, 0x0C61, Lo), (0x0C62, 0x0C63, Mn),
    (0x0C66, 0x0C6F, Nd), (0x0C77, 0x0C77, Po), (0x0C78, 0x0C7E, No),
    (0x0C7F, 0x0C7F, So), (0x0C80, 0x0C80, Lo), (0x0C81, 0x0C81, Mn),
    (0x0C82, 0x0C83, Mc), (0x0C84, 0x0C84, Po), (0x0C85, 0x0C8C, Lo),
    (0x0C8E, 0x0C90, Lo), (0x0C92, 0x0CA8, Lo), (0x0CAA, 0x0CB3, Lo),
    (0x0CB5, 0x0CB9, Lo), (0x0CBC, 0x0CBC, Mn), (0x0CBD, 0x0CBD, Lo),
    (0x0CBE, 0x0CBE, Mc), (0x0CBF, 0x0CBF, Mn), (0x0CC0, 0x0CC4, Mc),
    (0x0CC6, 0x0CC6, Mn), (0x0CC7, 0x0CC8, Mc), (0x0CCA, 0x0CCB, Mc),
    (0x0CCC, 0x0CCD, Mn), (0x0CD5, 0x0CD6, Mc), (0x0CDD, 0x0CDE, Lo),
    (0x0CE0, 0x0CE1, Lo), (0x0CE2, 0x0CE3, Mn), (0x0CE6, 0x0CEF, Nd),
    (0x0CF1, 0x0CF2, Lo), (0x0D00, 0x0D01, Mn), (0x0D02, 0x0D03, Mc),
    (0x0D04, 0x0D0C, Lo), (0x0D0E, 0x0D10, Lo), (0x0D12, 0x0D3A, Lo),
    (0x0D3B, 0x0D3C, Mn), (0x0D3D, 0x0D3D, Lo), (0x0D3E, 0x0D40, Mc),
    (0x0D41, 0x0D44, Mn), (0x0D46, 0x0D48, Mc), (0x0D4A, 0x0D4C, Mc),
    (0x0D4D, 0x0D4D, Mn), (0x0D4E, 0x0D4E, Lo), (0x0D4F, 0x0D4F, So),
    (0x0D54, 0x0D56, Lo), (0x0D57, 0x0D57, Mc), (0x0D58, 0x0D5E, No),
    (0x0D5F, 0x0D61, Lo), (0x0D62, 0x0D63, Mn), (0x0D66, 0x0D6F, Nd),
    (0x0D70, 0x0D78, No), (0x0D79, 0x0D79, So), (0x0D7A, 0x0D7F, Lo),
    (0x0D81, 0x0D81, Mn), (0x0D82, 0x0D83, Mc), (0x0D85, 0x0D96, Lo),
    (0x0D9A, 0x0DB1, Lo), (0x0DB3, 0x0DBB, Lo), (0x0DBD, 0x0DBD, Lo),
    (0x0DC0, 0x0DC6, Lo), (0x0DCA, 0x0DCA, Mn), (0x0DCF, 0x0DD1, Mc),
    (0x0DD2, 0x0DD4, Mn), (0x0DD6, 0x0DD6, Mn), (0x0DD8, 0x0DDF, Mc),
    (0x0DE6, 0x0DEF, Nd), (0x0DF2, 0x0DF3, Mc), (0x0DF4, 0x0DF4, Po),
    (0x0E01, 0x0E30, Lo), (0x0E31, 0x0E31, Mn), (0x0E32, 0x0E33, Lo),
    (0x0E34, 0x0E3A, Mn), (0x0E3F, 0x0E3F, Sc), (0x0E40, 0x0E45, Lo),
    (0x0E46, 0x0E46, Lm), (0x0E47, 0x0E4E, Mn), (0x0E4F, 0x0E4F, Po),
    (0x0E50, 0x0E59, Nd), (0x0E5A, 0x0E5B, Po), (0x0E81, 0x0E82, Lo),
    (0x0E84, 0x0E84, Lo), (0x0E86, 0x0E8A, Lo), (0x0E8C, 0x0EA3, Lo),
    (0x0EA5, 0x0EA5, Lo), (0x0EA7, 0x0EB0, Lo), (0x0EB1, 0x0EB1, Mn),
    (0x0EB2, 0x0EB3, Lo), (0x0EB4, 0x0EBC, Mn), (0x0EBD, 0x0EBD, Lo),
    (0x0EC0, 0x0EC4, Lo), (0x0EC6, 0x0EC6, Lm), (0x0EC8, 0x0ECD, Mn),
    (0x0ED0, 0x0ED9, Nd), (0x0EDC, 0x0EDF, Lo), (0x0F00, 0x0F00, Lo),
    (0x0F01, 0x0F03, So), (0x0F04, 0x0F12, Po), (0x0F13, 0x0F13, So),
    (0x0F14, 0x0F14, Po), (0x0F15, 0x0F17, So), (0x0F18, 0x0F19, Mn),
    (0x0F1A, 0x0F1F, So), (0x0F20, 0x0F29, Nd), (0x0F2A, 0x0F33, No),
    (0x0F34, 0x0F34, So), (0x0F35, 0x0F35, Mn), (0x0F36, 0x0F36, So),
    (0x0F37, 0x0F37, Mn), (0x0F38, 0x0F38, So), (0x0F39, 0x0F39, Mn),
    (0x0F3A, 0x0F3A, Ps), (0x0F3B, 0x0F3B, Pe), (0x0F3C, 0x0F3C, Ps),
    (0x0F3D, 0x0F3D, Pe), (0x0F3E, 0x0F3F, Mc), (0x0F40, 0x0F47, Lo),
    (0x0F49, 0x0F6C, Lo), (0x0F71, 0x0F7E, Mn), (0x0F7F, 0x0F7F, Mc),
    (0x0F80, 0x0F84, Mn), (0x0F85, 0x0F85, Po), (0x0F86, 0x0F87, Mn),
    (0x0F88, 0x0F8C, Lo), (0x0F8D, 0x0F97, Mn), (0x0F99, 0x0FBC, Mn),
    (0x0FBE, 0x0FC5, So), (0x0FC6, 0x0FC6, Mn), (0x0FC7, 0x0FCC, So),
    (0x0FCE, 0x0FCF, So), (0x0FD0, 0x0FD4, Po), (0x0FD5, 0x0FD8, So),
    (0x0FD9, 0x0FDA, Po), (0x1000, 0x102A, Lo), (0x102B, 0x102C, Mc),
    (0x102D, 0x1030, Mn), (0x1031, 0x1031, Mc), (0x1032, 0x1037, Mn),
    (0x1038, 0x1038, Mc), (0x1039, 0x103A, Mn), (0x103B, 0x103C, Mc),
    (0x103D, 0x103E, Mn), (0x103F, 0x103F, Lo), (0x1040, 0x1049, Nd),
    (0x104A, 0x104F, Po), (0x1050, 0x1055, Lo), (0x1056, 0x1057, Mc),
    (0x1058, 0x1059, Mn), (0x105A, 0x105D, Lo), (0x105E, 0x1060, Mn),
    (0x1061, 0x1061, Lo), (0x1062, 0x1064, Mc), (0x1065, 0x1066, Lo),
    (0x1067, 0x106D, Mc), (0x106E, 0x1070, Lo), (0x1071, 0x1074, Mn),
    (0x1075, 0x1081, Lo), (0x1082, 0x1082, Mn), (0x1083, 0x1084, Mc),
    (0x1085, 0x1086, Mn), (0x1087, 0x108C, Mc), (0x108D, 0x108D, Mn),
    (0x108E, 0x108E, Lo), (0x108F, 0x108F, Mc), (0x1090, 0x1099, Nd),
    (0x109A, 0x109C, Mc), (0x109D, 0x109D, Mn), (0x109E, 0x109F, So),
    (0x10A0, 0x10C5, Lu), (0x10C7, 0x10C7, Lu), (0x10CD, 0x10CD, Lu),
    (0x10D0, 0x10FA, Ll), (0x10FB, 0x10FB, Po), (0x10FC, 0x10FC, Lm),
    (0x10FD, 0x10FF, Ll), (0x1100, 0x1248, Lo), (0x124A, 0x124D, Lo),
    (0x1250, 0x1256, Lo), (0x1258, 0x1258, Lo), (0x125A, 0x125D, Lo),
    (0x1260, 0x1288, Lo), (0x128A, 0x128D, Lo), (0x1290, 0x12B0, Lo),
    (0x12B2, 0x12B5, Lo), (0x12B8, 0x12BE, Lo), (0x12C0, 0x12C0, Lo),
    (0x12C2, 0x12C5, Lo), (0x12C8, 0x12D6, Lo), (0x12D8, 0x1310, Lo),
    (0x1312, 0x1315, Lo), (0x1318, 0x135A, Lo), (0x135D, 0x135F, Mn),
    (0x1360, 0x1368, Po), (0x1369, 0x137C, No), (0x1380, 0x138F, Lo),
    (0x1390, 0x1399, So), (0x13A0, 0x13F5, Lu), (0x13F8, 0x13FD, Ll),
    (0x1400, 0x1400, Pd), (0x1401, 0x166C, Lo), (0x166D, 0x166D, So),
    (0x166E, 0x166E, Po), (0x166F, 0x167F, Lo), (0x1680, 0x1680, Zs),
    (0x1681, 0x169A, Lo), (0x169B, 0x169B, Ps), (0x169C, 0x169C, Pe),
    (0x16A0, 0x16EA, Lo), (0x16EB, 0x16ED, Po), (0x16EE, 0x16F0, Nl),
    (0x16F1, 0x16F8, Lo), (0x1700, 0x1711, Lo), (0x1712, 0x1714, Mn),
    (0x1715, 0x1715, Mc), (0x171F, 0x1731, Lo), (0x1732, 0x1733, Mn),
    (0x1734, 0x1734, Mc), (0x1735, 0x1736, Po), (0x1740, 0x1751, Lo),
    (0x1752, 0x1753, Mn), (0x1760, 0x176C, Lo), (0x176E, 0x1770, Lo),
    (0x1772, 0x1773, Mn), (0x1780, 0x17B3, Lo), (0x17B4, 0x17B5, Mn),
    (0x17B6, 0x17B6, Mc), (0x17B7, 0x17BD, Mn), (0x17BE, 0x17C5, Mc),
    (0x17C6, 0x17C6, Mn), (0x17C7, 0x17C8, Mc), (0x17C9, 0x17D3, Mn),
    (0x17D4, 0x17D6, Po), (0x17D7, 0x17D7, Lm), (0x17D8, 0x17DA, Po),
    (0x17DB, 0x17DB, Sc), (0x17DC, 0x17DC, Lo), (0x17DD, 0x17DD, Mn),
    (0x17E0, 0x17E9, Nd), (0x17F0, 0x17F9, No), (0x1800, 0x1805, Po),
    (0x1806, 0x1806, Pd), (0x1807, 0x180A, Po), (0x180B, 0x180D, Mn),
    (0x180E, 0x180E, Cf), (0x180F, 0x180F, Mn), (0x1810, 0x1819, Nd),
    (0x1820, 0x1842, Lo), (0x1843, 0x1843, Lm), (0x1844, 0x1878, Lo),
    (0x1880, 0x1884, Lo), (0x1885, 0x1886, Mn), (0x1887, 0x18A8, Lo),
    (0x18A9, 0x18A9, Mn), (0x18AA, 0x18AA, Lo), (0x18B0, 0x18F5, Lo),
    (0x1900, 0x191E, Lo), (0x1920, 0x1922, Mn), (0x1923, 0x1926, Mc),
    (0x1927, 0x1928, Mn), (0x1929, 0x192B, Mc), (0x1930, 0x1931, Mc),
    (0x1932, 0x1932, Mn), (0x1933, 0x1938, Mc), (0x1939, 0x193B, Mn),
    (0x1940, 0x1940, So), (0x1944, 0x1945, Po), (0x1946, 0x194F, Nd),
    (0x1950, 0x196D, Lo), (0x1970, 0x1974, Lo), (0x1980, 0x19AB, Lo),
    (0x19B0, 0x19C9, Lo), (0x19D0, 0x19D9, Nd), (0x19DA, 0x19DA, No),
    (0x19DE, 0x19FF, So), (0x1A00, 0x1A16, Lo), (0x1A17, 0x1A18, Mn),
    (0x1A19, 0x1A1A, Mc), (0x1A1B, 0x1A1B, Mn), (0x1A1E, 0x1A1F, Po),
    (0x1A20, 0x1A54, Lo), (0x1A55, 0x1A55, Mc), (0x1A56, 0x1A56, Mn),
    (0x1A57, 0x1A57, Mc), (0x1A58, 0x1A5E, Mn), (0x1A60, 0x1A60, Mn),
    (0x1A61, 0x1A61, Mc), (0x1A62, 0x1A62, Mn), (0x1A63, 0x1A64, Mc),
    (0x1A65, 0x1A6C, Mn), (0x1A6D, 0x1A72, Mc), (0x1A73, 0x1A7C, Mn),
    (0x1A7F, 0x1A7F, Mn), (0x1A80, 0x1A89, Nd), (0x1A90, 0x1A99, Nd),
    (0x1AA0, 0x1AA6, Po), (0x1AA7, 0x1AA7, Lm), (0x1AA8, 0x1AAD, Po),
    (0x1AB0, 0x1ABD, Mn), (0x1ABE, 0x1ABE, Me), (0x1ABF, 0x1ACE, Mn),
    (0x1B00, 0x1B03, Mn), (0x1B04, 0x1B04, Mc), (0x1B05, 0x1B33, Lo),
    (0x1B34, 0x1B34, Mn), (0x1B35, 0x1B35, Mc), (0x1B36, 0x1B3A, Mn),
    (0x1B3B, 0x1B3B, Mc), (0x1B3C, 0x1B3C, Mn), (0x1B3D, 0x1B41, Mc),
    (0x1B42, 0x1B42, Mn), (0x1B43, 0x1B44, Mc), (0x1B45, 0x1B4C, Lo),
    (0x1B50, 0x1B59, Nd), (0x1B5A, 0x1B60, Po), (0x1B61, 0x1B6A, So),
    (0x1B6B, 0x1B73, Mn), (0x1B74, 0x1B7C, So), (0x1B7D, 0x1B7E, Po),
    (0x1B80, 0x1B81, Mn), (0x1B82, 0x1B82, Mc), (0x1B83, 0x1BA0, Lo),
    (0x1BA1, 0x1BA1, Mc), (0x1BA2, 0x1BA5, Mn), (0x1BA6, 0x1BA7, Mc),
    (0x1BA8, 0x1BA9, Mn), (0x1BAA, 0x1BAA, Mc), (0x1BAB, 0x1BAD, Mn),
    (0x1BAE, 0x1BAF, Lo), (0x1BB0, 0x1BB9, Nd), (0x1BBA, 0x1BE5, Lo),
    (0x1BE6, 0x1BE6, Mn), (0x1BE7, 0x1BE7, Mc), (0x1BE8, 0x1BE9, Mn),
    (0x1BEA, 0x1BEC, Mc), (0x1BED, 0x1BED, Mn), (0x1BEE, 0x1BEE, Mc),
    (0x1BEF, 0x1BF1, Mn), (0x1BF2, 0x1BF3, Mc), (0x1BFC, 0x1BFF, Po),
    (0x1C00, 0x1C23, Lo), (0x1C24, 0x1C2B, Mc), (0x1C2C, 0x1C33, Mn),
    (0x1C34, 0x1C35, Mc), (0x1C36, 0x1C37, Mn), (0x1C3B, 0x1C3F, Po),
    (0x1C40, 0x1C49, Nd), (0x1C4D, 0x1C4F, Lo), (0x1C50, 0x1C59, Nd),
    (0x1C5A, 0x1C77, Lo), (0x1C78, 0x1C7D, Lm), (0x1C7E, 0x1C7F, Po),
    (0x1C80, 0x1C88, Ll), (0x1C90, 0x1CBA, Lu), (0x1CBD, 0x1CBF, Lu),
    (0x1CC0, 0x1CC7, Po), (0x1CD0, 0x1CD2, Mn), (0x1CD3, 0x1CD3, Po),
    (0x1CD4, 0x1CE0, Mn), (0x1CE1, 0x1CE1, Mc), (0x1CE2, 0x1CE8, Mn),
    (0x1CE9, 0x1CEC, Lo), (0x1CED, 0x1CED, Mn), (0x1CEE, 0x1CF3, Lo),
    (0x1CF4, 0x1CF4, Mn), (0x1CF5, 0x1CF6, Lo), (0x1CF7, 0x1CF7, Mc),
    (0x1CF8, 0x1CF9, Mn), (0x1CFA, 0x1CFA, Lo), (0x1D00, 0x1D2B, Ll),
    (0x1D2C, 0x1D6A, Lm), (0x1D6B, 0x1D77, Ll), (0x1D78, 0x1D78, Lm),
    (0x1D79, 0x1D9A, Ll), (0x1D9B, 0x1DBF, Lm), (0x1DC0, 0x1DFF, Mn),
    (0x1E00, 0x1E00, Lu), (0x1E01, 0x1E01, Ll), (0x1E02, 0x1E02, Lu),
    (0x1E03, 0x1E03, Ll), (0x1E04, 0x1E04, Lu), (0x1E05, 0x1E05, Ll),
    (0x1E06, 0x1E06, Lu), (0x1E07, 0x1E07, Ll), (0x1E08, 0x1E08, Lu),
    (0x1E09, 0x1E09, Ll), (0x1E0A, 0x1E0A, Lu), (0x1E0B, 0x1E0B, Ll),
    (0x1E0C, 0x1E0C, Lu), (0x1E0D, 0x1E0D, Ll), (0x1E0E, 0x1E0E, Lu),
    (0x1E0F, 0x1E0F, Ll), (0x1E10, 0x1E10, Lu), (0x1E11, 0x1E11, Ll),
    (0x1E12, 0x1E12, Lu), (0x1E13, 0x1E13, Ll), (0x1E14, 0x1E14, Lu),
    (0x1E15, 0x1E15, Ll), (0x1E16, 0x1E16, Lu), (0x1E17, 0x1E17, Ll),
    (0x1E18, 0x1E18, Lu), (0x1E19, 0x1E19, Ll), (0x1E1A, 0x1E1A, Lu),
    (0x1E1B, 0x1E1B, Ll), (0x1E1C, 0x1E1C, Lu), (0x1E1D, 0x1E1D, Ll),
    (0x1E1E, 0x1E1E, Lu), (0x1E1F, 0x1E1F, Ll), (0x1E20, 0x1E20, Lu),
    (0x1E21, 0x1E21, Ll), (0x1E22, 0x1E22, Lu), (0x1E23, 0x1E23, Ll),
    (0x1E24, 0x1E24, Lu), (0x1E25, 0x1E25, Ll), (0x1E26, 0x1E26, Lu),
    (0x1E27, 0x1E27, Ll), (0x1E28, 0x1E28, Lu), (0x1E29, 0x1E29, Ll),
    (0x1E2A, 0x1E2A, Lu), (0x1E2B, 0x1E2B, Ll), (0x1E2C, 0x1E2C, Lu),
    (0x1E2D, 0x1E2D, Ll), (0x1E2E, 0x1E2E, Lu), (0x1E2F, 0x1E2F, Ll),
    (0x1E30, 0x1E30, Lu), (0x1E31, 0x1E31, Ll), (0x1E32, 0x1E32, Lu),
    (0x1E33, 0x1E33, Ll), (0x1E34, 0x1E34, Lu), (0x1E35, 0x1E35, Ll),
    (0x1E36, 0x1E36, Lu), (0x1E37, 0x1E37, Ll), (0x1E38, 0x1E38, Lu),
    (0x1E39, 0x1E39, Ll), (0x1E3A, 0x1E3A, Lu), (0x1E3B, 0x1E3B, Ll),
    (0x1E3C, 0x1E3C, Lu), (0x1E3D, 0x1E3D, Ll), (0x1E3E, 0x1E3E, Lu),
    (0x1E3F, 0x1E3F, Ll), (0x1E40, 0x1E40, Lu), (0x1E41, 0x1E41, Ll),
    (0x1E42, 0x1E42, Lu), (0x1E43, 0x1E43, Ll), (0x1E44, 0x1E44, Lu),
    (0x1E45, 0x1E45, Ll), (0x1E46, 0x1E46, Lu), (0x1E47, 0x1E47, Ll),
    (0x1E48, 0x1E48, Lu), (0x1E49, 0x1E49, Ll), (0x1E4A, 0x1E4A, Lu),
    (0x1E4B, 0x1E4B, Ll), (0x1E4C, 0x1E4C, Lu), (0x1E4D, 0x1E4D, Ll),
    (0x1E4E, 0x1E4E, Lu), (0x1E4F, 0x1E4F, Ll), (0x1E50, 0x1E50, Lu),
    (0x1E51, 0x1E51, Ll), (0x1E52, 0x1E52, Lu), (0x1E53, 0x1E53, Ll),
    (0x1E54, 0x1E54, Lu), (0x1E55, 0x1E55, Ll), (0x1E56, 0x1E56, Lu),
    (0x1E57, 0x1E57, Ll), (0x1E58, 0x1E58, Lu), (0x1E59, 0x1E59, Ll),
    (0x1E5A, 0x1E5A, Lu), (0x1E5B, 0x1E5B, Ll), (0x1E5C, 0x1E5C, Lu),
    (0x1E5D, 0x1E5D, Ll), (0x1E5E, 0x1E5E, Lu), (0x1E5F, 0x1E5F, Ll),
    (0x1E60, 0x1E60, Lu), (0x1E61, 0x1E61, Ll), (0x1E62, 0x1E62, Lu),
    (0x1E63, 0x1E63, Ll), (0x1E64, 0x1E64, Lu), (0x1E65, 0x1E65, Ll),
    (0x1E66, 0x1E66, Lu), (0x1E67, 0x1E67, Ll), (0x1E68, 0x1E68, Lu),
    (0x1E69, 0x1E69, Ll), (0x1E6A, 0x1E6A, Lu), (0x1E6B, 0x1E6B, Ll),
    (0x1E6C, 0x1E6C, Lu), (0x1E6D, 0x1E6D, Ll), (0x1E6E, 0x1E6E, Lu),
    (0x1E6F, 0x1E6F, Ll), (0x1E70, 0x1E70, Lu), (0x1E71, 0x1E71, Ll),
    (0x1E72, 0x1E72, Lu), (0x1E73, 0x1E73, Ll), (0x1E74, 0x1E74, Lu),
    (0x1E75, 0x1E75, Ll), (0x1E76, 0x1E76, Lu), (0x1E77, 0x1E77, Ll),
    (0x1E78, 0x1E78, Lu), (0x1E79, 0x1E79, Ll), (0x1E7A, 0x1E7A, Lu),
    (0x1E7B, 0x1E7B, Ll), (0x1E7C, 0x1E7C, Lu), (0x1E7D, 0x1E7D, Ll),
    (0x1E7E, 0x1E7E, Lu), (0x1E7F, 0x1E7F, Ll), (0x1E80, 0x1E80, Lu),
    (0x1E81, 0x1E81, Ll), (0x1E82, 0x1E82, Lu), (0x1E83, 0x1E83, Ll),
    (0x1E84, 0x1E84, Lu), (0x1E85, 0x1E85, Ll), (0x1E86, 0x1E86, Lu),
    (0x1E87, 0x1E87, Ll), (0x1E88, 0x1E88, Lu), (0x1E89, 0x1E89, Ll),
    (0x1E8A, 0x1E8A, Lu), (0x1E8B, 0x1E8B, Ll), (0x1E8C, 0x1E8C, Lu),
    (0x1E8D, 0x1E8D, Ll), (0x1E8E, 0x1E8E, Lu), (0x1E8F, 0x1E8F, Ll),
    (0x1E90, 0x1E90, Lu), (0x1E91, 0x1E91, Ll), (0x1E92, 0x1E92, Lu),
    (0x1E93, 0x1E93, Ll), (0x1E94, 0x1E94, Lu), (0x1E95, 0x1E9D, Ll),
    (0x1E9E, 0x1E9E, Lu), (0x1E9F, 0x1E9F, Ll), (0x1EA0, 0x1EA0, Lu),
    (0x1EA1, 0x1EA1, Ll), (0x1EA2, 0x1EA2, Lu), (0x1EA3, 0x1EA3, Ll),
    (0x1EA4, 0x1EA4, Lu), (0x1EA5, 0x1EA5, Ll), (0x1EA6, 0x1EA6, Lu),
    (0x1EA7, 0x1EA7, Ll), (0x1EA8, 0x1EA8, Lu), (0x1EA9, 0x1EA9, Ll),
    (0x1EAA, 0x1EAA, Lu), (0x1EAB, 0x1EAB, Ll), (0x1EAC, 0x1EAC, Lu),
    (0x1EAD, 0x1EAD, Ll), (0x1EAE, 0x1EAE, Lu), (0x1EAF, 0x1EAF, Ll),
    (0x1EB0, 0x1EB0, Lu), (0x1EB1, 0x1EB1, Ll), (0x1EB2, 0x1EB2, Lu),
    (0x1EB3, 0x1EB3, Ll), (0x1EB4, 0x1EB4, Lu), (0x1EB5, 0x1EB5, Ll),
    (0x1EB6, 0x1EB6, Lu), (0x1EB7, 0x1EB7, Ll), (0x1EB8, 0x1EB8, Lu),
    (0x1EB9, 0x1EB9, Ll), (0x1EBA, 0x1EBA, Lu), (0x1EBB, 0x1EBB, Ll),
    (0x1EBC, 0x1EBC, Lu), (0x1EBD, 0x1EBD, Ll), (0x1EBE, 0x1EBE, Lu),
    (0x1EBF, 0x1EBF, Ll), (0x1EC0, 0x1EC0, Lu), (0x1EC1, 0x1EC1, Ll),
    (0x1EC2, 0x1EC2, Lu), (0x1EC3, 0x1EC3, Ll), (0x1EC4, 0x1EC4, Lu),
    (0x1EC5, 0x1EC5, Ll), (0x1EC6, 0x1EC6, Lu), (0x1EC7, 0x1EC7, Ll),
    (0x1EC8, 0x1EC8, Lu), (0x1EC9, 0x1EC9, Ll), (0x1ECA, 0x1ECA, Lu),
    (0x1ECB, 0x1ECB, Ll), (0x1ECC, 0x1ECC, Lu), (0x1ECD, 0x1ECD, Ll),
    (0x1ECE, 0x1ECE, Lu), (0x1ECF, 0x1ECF, Ll), (0x1ED0, 0x1ED0, Lu),
    (0x1ED1, 0x1ED1, Ll), (0x1ED2, 0x1ED2, Lu), (0x1ED3, 0x1ED3, Ll),
    (0x1ED4, 0x1ED4, Lu), (0x1ED5, 0x1ED5, Ll), (0x1ED6, 0x1ED6, Lu),
    (0x1ED7, 0x1ED7, Ll), (0x1ED8, 0x1ED8, Lu), (0x1ED9, 0x1ED9, Ll),
    (0x1EDA, 0x1EDA, Lu), (0x1EDB, 0x1EDB, Ll), (0x1EDC, 0x1EDC, Lu),
    (0x1EDD, 0x1EDD, Ll), (0x1EDE, 0x1EDE, Lu), (0x1EDF, 0x1EDF, Ll),
    (0x1EE0, 0x1EE0, Lu), (0x1EE1, 0x1EE1, Ll), (0x1EE2, 0x1EE2, Lu),
    (0x1EE3, 0x1EE3, Ll), (0x1EE4, 0x1EE4, Lu), (0x1EE5, 0x1EE5, Ll),
    (0x1EE6, 0x1EE6, Lu), (0x1EE7, 0x1EE7, Ll), (0x1EE8, 0x1EE8, Lu),
    (0x1EE9, 0x1EE9, Ll), (0x1EEA, 0x1EEA, Lu), (0x1EEB, 0x1EEB, Ll),
    (0x1EEC, 0x1EEC, Lu), (0x1EED, 0x1EED, Ll), (0x1EEE, 0x1EEE, Lu),
    (0x1EEF, 0x1EEF, Ll), (0x1EF0, 0x1EF0, Lu), (0x1EF1, 0x1EF1, Ll),
    (0x1EF2, 0x1EF2, Lu), (0x1EF3, 0x1EF3, Ll), (0x1EF4, 0x1EF4, Lu),
    (0x1EF5, 0x1EF5, Ll), (0x1EF6, 0x1EF6, Lu), (0x1EF7, 0x1EF7, Ll),
    (0x1EF8, 0x1EF8, Lu), (0x1EF9, 0x1EF9, Ll), (0x1EFA, 0x1EFA, Lu),
    (0x1EFB, 0x1EFB, Ll), (0x1EFC, 0x1EFC, Lu), (0x1EFD, 0x1EFD, Ll),
    (0x1EFE, 0x1EFE, Lu), (0x1EFF, 0x1F07, Ll), (0x1F08, 0x1F0F, Lu),
    (0x1F10, 0x1F15, Ll), (0x1F18, 0x1F1D, Lu), (0x1F20, 0x1F27, Ll),
    (0x1F28, 0x1F2F, Lu), (0x1F30, 0x1F37, Ll), (0x1F38, 0x1F3F, Lu),
    (0x1F40, 0x1F45, Ll), (0x1F48, 0x1F4D, Lu), (0x1F50, 0x1F57, Ll),
    (0x1F59, 0x1F59, Lu), (0x1F5B, 0x1F5B, Lu), (0x1F5D, 0x1F5D, Lu),
    (0x1F5F, 0x1F5F, Lu), (0x1F60, 0x1F67, Ll), (0x1F68, 0x1F6F, Lu),
    (0x1F70, 0x1F7D, Ll), (0x1F80, 0x1F87, Ll), (0x1F88, 0x1F8F, Lt),
    (0x1F90, 0x1F97, Ll), (0x1F98, 0x1F9F, Lt), (0x1FA0, 0x1FA7, Ll),
    (0x1FA8, 0x1FAF, Lt), (0x1FB0, 0x1FB4, Ll), (0x1FB6, 0x1FB7, Ll),
    (0x1FB8, 0x1FBB, Lu), (0x1FBC, 0x1FBC, Lt), (0x1FBD, 0x1FBD, Sk),
    (0x1FBE, 0x1FBE, Ll), (0x1FBF, 0x1FC1, Sk), (0x1FC2, 0x1FC4, Ll),
    (0x1FC6, 0x1FC7, Ll), (0x1FC8, 0x1FCB, Lu), (0x1FCC, 0x1FCC, Lt),
    (0x1FCD, 0x1FCF, Sk), (0x1FD0, 0x1FD3, Ll), (0x1FD6, 0x1FD7, Ll),
    (0x1FD8, 0x1FDB, Lu), (0x1FDD, 0x1FDF, Sk), (0x1FE0, 0x1FE7, Ll),
    (0x1FE8, 0x1FEC, Lu), (0x1FED, 0x1FEF, Sk), (0x1FF2, 0x1FF4, Ll),
    (0x1FF6, 0x1FF7, Ll), (0x1FF8, 0x1FFB, Lu), (0x1FFC, 0x1FFC, Lt),
    (0x1FFD, 0x1FFE, Sk), (0x2000, 0x200A, Zs), (0x200B, 0x200F, Cf),
    (0x2010, 0x2015, Pd), (0x2016, 0x2017, Po), (0x2018, 0x2018, Pi),
    (0x2019, 0x2019, Pf), (0x201A, 0x201A, Ps), (0x201B, 0x201C, Pi),
    (0x201D, 0x201D, Pf), (0x201E, 0x201E, Ps), (0x201F, 0x201F, Pi),
    (0x2020, 0x2027, Po), (0x2028, 0x2028, Zl), (0x2029, 0x2029, Zp),
    (0x202A, 0x202E, Cf), (0x202F, 0x202F, Zs), (0x2030, 0x2038, Po),
    (0x2039, 0x2039, Pi), (0x203A, 0x203A, Pf), (0x203B, 0x203E, Po),
    (0x203F, 0x2040, Pc), (0x2041, 0x2043, Po), (0x2044, 0x2044, Sm),
    (0x2045, 0x2045, Ps), (0x2046, 0x2046, Pe), (0x2047, 0x2051, Po),
    (0x2052, 0x2052, Sm), (0x2053, 0x2053, Po), (0x2054, 0x2054, Pc),
    (0x2055, 0x205E, Po), (0x205F, 0x205F, Zs), (0x2060, 0x2064, Cf),
    (0x2066, 0x206F, Cf), (0x2070, 0x2070, No), (0x2071, 0x2071, Lm),
    (0x2074, 0x2079, No), (0x207A, 0x207C, Sm), (0x207D, 0x207D, Ps),
    (0x207E, 0x207E, Pe), (0x207F, 0x207F, Lm), (0x2080, 0x2089, No),
    (0x208A, 0x208C, Sm), (0x208D, 0x208D, Ps), (0x208E, 0x208E, Pe),
    (0x2090, 0x209C, Lm), (0x20A0, 0x20C0, Sc), (0x20D0, 0x20DC, Mn),
    (0x20DD, 0x20E0, Me), (0x20E1, 0x20E1, Mn), (0x20E2, 0x20E4, Me),
    (0x20E5, 0x20F0, Mn), (0x2100, 0x2101, So), (0x2102, 0x2102, Lu),
    (0x2103, 0x2106, So), (0x2107, 0x2107, Lu), (0x2108, 0x2109, So),
    (0x210A, 0x210A, Ll), (0x210B, 0x210D, Lu), (0x210E, 0x210F, Ll),
    (0x2110, 0x2112, Lu), (0x2113, 0x2113, Ll), (0x2114, 0x2114, So),
    (0x2115, 0x2115, Lu), (0x2116, 0x2117, So), (0x2118, 0x2118, Sm),
    (0x2119, 0x211D, Lu), (0x211E, 0x2123, So), (0x2124, 0x2124, Lu),
    (0x2125, 0x2125, So), (0x2126, 0x2126, Lu), (0x2127, 0x2127, So),
    (0x2128, 0x2128, Lu), (0x2129, 0x2129, So), (0x212A, 0x212D, Lu),
    (0x212E, 0x212E, So), (0x212F, 0x212F, Ll), (0x2130, 0x2133, Lu),
    (0x2134, 0x2134, Ll), (0x2135, 0x2138, Lo), (0x2139, 0x2139, Ll),
    (0x213A, 0x213B, So), (0x213C, 0x213D, Ll), (0x213E, 0x213F, Lu),
    (0x2140, 0x2144, Sm), (0x2145, 0x2145, Lu), (0x2146, 0x2149, Ll),
    (0x214A, 0x214A, So), (0x214B, 0x214B, Sm), (0x214C, 0x214D, So),
    (0x214E, 0x214E, Ll), (0x214F, 0x214F, So), (0x2150, 0x215F, No),
    (0x2160, 0x2182, Nl), (0x2183, 0x2183, Lu), (0x2184, 0x2184, Ll),
    (0x2185, 0x2188, Nl), (0x2189, 0x2189, No), (0x218A, 0x218B, So),
    (0x2190, 0x2194, Sm), (0x2195, 0x2199, So), (0x219A, 0x219B, Sm),
    (0x219C, 0x219F, So), (0x21A0, 0x21A0, Sm), (0x21A1, 0x21A2, So),
    (0x21A3, 0x21A3, Sm), (0x21A4, 0x21A5, So), (0x21A6, 0x21A6, Sm),
    (0x21A7, 0x21AD, So), (0x21AE, 0x21AE, Sm), (0x21AF, 0x21CD, So),
    (0x21CE, 0x21CF, Sm), (0x21D0, 0x21D1, So), (0x21D2, 0x21D2, Sm),
    (0x21D3, 0x21D3, So), (0x21D4, 0x21D4, Sm), (0x21D5, 0x21F3, So),
    (0x21F4, 0x22FF, Sm), (0x2300, 0x2307, So), (0x2308, 0x2308, Ps),
    (0x2309, 0x2309, Pe), (0x230A, 0x230A, Ps), (0x230B, 0x230B, Pe),
    (0x230C, 0x231F, So), (0x2320, 0x2321, Sm), (0x2322, 0x2328, So),
    (0x2329, 0x2329, Ps), (0x232A, 0x232A, Pe), (0x232B, 0x237B, So),
    (0x237C, 0x237C, Sm), (0x237D, 0x239A, So), (0x239B, 0x23B3, Sm),
    (0x23B4, 0x23DB, So), (0x23DC, 0x23E1, Sm), (0x23E2, 0x2426, So),
    (0x2440, 0x244A, So), (0x2460, 0x249B, No), (0x249C, 0x24E9, So),
    (0x24EA, 0x24FF, No), (0x2500, 0x25B6, So), (0x25B7, 0x25B7, Sm),
    (0x25B8, 0x25C0, So), (0x25C1, 0x25C1, Sm), (0x25C2, 0x25F7, So),
    (0x25F8, 0x25FF, Sm), (0x2600, 0x266E, So), (0x266F, 0x266F, Sm),
    (0x2670, 0x2767, So), (0x2768, 0x2768, Ps), (0x2769, 0x2769, Pe),
    (0x276A, 0x276A, Ps), (0x276B, 0x276B, Pe), (0x276C, 0x276C, Ps),
    (0x276D, 0x276D, Pe), (0x276E, 0x276E, Ps), (0x276F, 0x276F, Pe),
    (0x2770, 0x2770, Ps), (0x2771, 0x2771, Pe), (0x2772, 0x2772, Ps),
    (0x2773, 0x2773, Pe), (0x2774, 0x2774, Ps), (0x2775, 0x2775, Pe),
    (0x2776, 0x2793, No), (0x2794, 0x27BF, So), (0x27C0, 0x27C4, Sm),
    (0x27C5, 0x27C5, Ps), (0x27C6, 0x27C6, Pe), (0x27C7, 0x27E5, Sm),
    (0x27E6, 0x27E6, Ps), (0x27E7, 0x27E7, Pe), (0x27E8, 0x27E8, Ps),
    (0x27E9, 0x27E9, Pe), (0x27EA, 0x27EA, Ps), (0x27EB, 0x27EB, Pe),
    (0x27EC, 0x27EC, Ps), (0x27ED, 0x27ED, Pe), (0x27EE, 0x27EE, Ps),
    (0x27EF, 0x27EF, Pe), (0x27F0, 0x27FF, Sm), (0x2800, 0x28FF, So),
    (0x2900, 0x2982, Sm), (0x2983, 0x2983, Ps), (0x2984, 0x2984, Pe),
    (0x2985, 0x2985, Ps), (0x2986, 0x2986, Pe), (0x2987, 0x2987, Ps),
    (0x2988, 0x2988, Pe), (0x2989, 0x2989, Ps), (0x298A, 0x298A, Pe),
    (0x298B, 0x298B, Ps), (0x298C, 0x298C, Pe), (0x298D, 0x298D, Ps),
    (0x298E, 0x298E, Pe), (0x298F, 0x298F, Ps), (0x2990, 0x2990, Pe),
    (0x2991, 0x2991, Ps), (0x2992, 0x2992, Pe), (0x2993, 0x2993, Ps),
    (0x2994, 0x2994, Pe), (0x2995, 0x2995, Ps), (0x2996, 0x2996, Pe),
    (0x2997, 0x2997, Ps), (0x2998, 0x2998, Pe), (0x2999, 0x29D7, Sm),
    (0x29D8, 0x29D8, Ps), (0x29D9, 0x29D9, Pe), (0x29DA, 0x29DA, Ps),
    (0x29DB, 0x29DB, Pe), (0x29DC, 0x29FB, Sm), (0x29FC, 0x29FC, Ps),
    (0x29FD, 0x29FD, Pe), (0x29FE, 0x2AFF, Sm), (0x2B00, 0x2B2F, So),
    (0x2B30, 0x2B44, Sm), (0x2B45, 0x2B46, So), (0x2B47, 0x2B4C, Sm),
    (0x2B4D, 0x2B73, So), (0x2B76, 0x2B95, So), (0x2B97, 0x2BFF, So),
    (0x2C00, 0x2C2F, Lu), (0x2C30, 0x2C5F, Ll), (0x2C60, 0x2C60, Lu),
    (0x2C61, 0x2C61, Ll), (0x2C62, 0x2C64, Lu), (0x2C65, 0x2C66, Ll),
    (0x2C67, 0x2C67, Lu), (0x2C68, 0x2C68, Ll), (0x2C69, 0x2C69, Lu),
    (0x2C6A, 0x2C6A, Ll), (0x2C6B, 0x2C6B, Lu), (0x2C6C, 0x2C6C, Ll),
    (0x2C6D, 0x2C70, Lu), (0x2C71, 0x2C71, Ll), (0x2C72, 0x2C72, Lu),
    (0x2C73, 0x2C74, Ll), (0x2C75, 0x2C75, Lu), (0x2C76, 0x2C7B, Ll),
    (0x2C7C, 0x2C7D, Lm), (0x2C7E, 0x2C80, Lu), (0x2C81, 0x2C81, Ll),
    (0x2C82, 0x2C82, Lu), (0x2C83, 0x2C83, Ll), (0x2C84, 0x2C84, Lu),
    (0x2C85, 0x2C85, Ll), (0x2C86, 0x2C86, Lu), (0x2C87, 0x2C87, Ll),
    (0x2C88, 0x2C88, Lu), (0x2C89, 0x2C89, Ll), (0x2C8A, 0x2C8A, Lu),
    (0x2C8B, 0x2C8B, Ll), (0x2C8C, 0x2C8C, Lu), (0x2C8D, 0x2C8D, Ll),
    (0x2C8E, 0x2C8E, Lu), (0x2C8F, 0x2C8F, Ll), (0x2C90, 0x2C90, Lu),
    (0x2C91, 0x2C91, Ll), (0x2C92, 0x2C92, Lu), (0x2C93, 0x2C93, Ll),
    (0x2C94, 0x2C94, Lu), (0x2C95, 0x2C95, Ll), (0x2C96, 0x2C96, Lu),
    (0x2C97, 0x2C97, Ll), (0x2C98, 0x2C98, Lu), (0x2C99, 0x2C99, Ll),
    (0x2C9A, 0x2C9A, Lu), (0x2C9B, 0x2C9B, Ll), (0x2C9C, 0x2C9C, Lu),
    (0x2C9D, 0x2C9D, Ll), (0x2C9E, 0x2C9E, Lu), (0x2C9F, 0x2C9F, Ll),
    (0x2CA0, 0x2CA0, Lu), (0x2CA1, 0x2CA1, Ll), (0x2CA2, 0x2CA2, Lu),
    (0x2CA3, 0x2CA3, Ll), (0x2CA4, 0x2CA4, Lu), (0x2CA5, 0x2CA5, Ll),
    (0x2CA6, 0x2CA6, Lu), (0x2CA7, 0x2CA7, Ll), (0x2CA8, 0x2CA8, Lu),
    (0x2CA9, 0x2CA9, Ll), (0x2CAA, 0x2CAA, Lu), (0x2CAB, 0x2CAB, Ll),
    (0x2CAC, 0x2CAC, Lu), (0x2CAD, 0x2CAD, Ll), (0x2CAE, 0x2CAE, Lu),
    (0x2CAF, 0x2CAF, Ll), (0x2CB0, 0x2CB0, Lu), (0x2CB1, 0x2CB1, Ll),
    (0x2CB2, 0x2CB2, Lu), (0x2CB3, 0x2CB3, Ll), (0x2CB4, 0x2CB4, Lu),
    (0x2CB5, 0x2CB5, Ll), (0x2CB6, 0x2CB6, Lu), (0x2CB7, 0x2CB7, Ll),
    (0x2CB8, 0x2CB8, Lu), (0x2CB9, 0x2CB9, Ll), (0x2CBA, 0x2CBA, Lu),
    (0x2CBB, 0x2CBB, Ll), (0x2CBC, 0x2CBC, Lu), (0x2CBD, 0x2CBD, Ll),
    (0x2CBE, 0x2CBE, Lu), (0x2CBF, 0x2CBF, Ll), (0x2CC0, 0x2CC0, Lu),
    (0x2CC1, 0x2CC1, Ll), (0x2CC2, 0x2CC2, Lu), (0x2CC3, 0x2CC3, Ll),
    (0x2CC4, 0x2CC4, Lu), (0x2CC5, 0x2CC5, Ll), (0x2CC6, 0x2CC6, Lu),
    (0x2CC7, 0x2CC7, Ll), (0x2CC8, 0x2CC8, Lu), (0x2CC9, 0x2CC9, Ll),
    (0x2CCA, 0x2CCA, Lu), (0x2CCB, 0x2CCB, Ll), (0x2CCC, 0x2CCC, Lu),
    (0x2CCD, 0x2CCD, Ll), (0x2CCE, 0x2CCE, Lu), (0x2CCF, 0x2CCF, Ll),
    (0x2CD0, 0x2CD0, Lu), (0x2CD1, 0x2CD1, Ll), (0x2CD2, 0x2CD2, Lu),
    (0x2CD3, 0x2CD3, Ll), (0x2CD4, 0x2CD4, Lu), (0x2CD5, 0x2CD5, Ll),
    (0x2CD6, 0x2CD6, Lu), (0x2CD7, 0x2CD7, Ll), (0x2CD8, 0x2CD8, Lu),
    (0x2CD9, 0x2CD9, Ll), (0x2CDA, 0x2CDA, Lu), (0x2CDB, 0x2CDB, Ll),
    (0x2CDC, 0x2CDC, Lu), (0x2CDD, 0x2CDD, Ll), (0x2CDE, 0x2CDE, Lu),
    (0x2CDF, 0x2CDF, Ll), (0x2CE0, 0x2CE0, Lu), (0x2CE1, 0x2CE1, Ll),
    (0x2CE2, 0x2CE2, Lu), (0x2CE3, 0x2CE4, Ll), (0x2CE5, 0x2CEA, So),
    (0x2CEB, 0x2CEB, Lu), (0x2CEC, 0x2CEC, Ll), (0x2CED, 0x2CED, Lu),
    (0x2CEE, 0x2CEE, Ll), (0x2CEF, 0x2CF1, Mn), (0x2CF2, 0x2CF2, Lu),
    (0x2CF3, 0x2CF3, Ll), (0x2CF9, 0x2CFC, Po), (0x2CFD, 0x2CFD, No),
    (0x2CFE, 0x2CFF, Po), (0x2D00, 0x2D25, Ll), (0x2D27, 0x2D27, Ll),
    (0x2D2D, 0x2D2D, Ll), (0x2D30, 0x2D67, Lo), (0x2D6F, 0x2D6F, Lm),
    (0x2D70, 0x2D70, Po), (0x2D7F, 0x2D7F, Mn), (0x2D80, 0x2D96, Lo),
    (0x2DA0, 0x2DA6, Lo), (0x2DA8, 0x2DAE, Lo), (0x2DB0, 0x2DB6, Lo),
    (0x2DB8, 0x2DBE, Lo), (0x2DC0, 0x2DC6, Lo), (0x2DC8, 0x2DCE, Lo),
    (0x2DD0, 0x2DD6, Lo), (0x2DD8, 0x2DDE, Lo), (0x2DE0, 0x2DFF, Mn),
    (0x2E00, 0x2E01, Po), (0x2E02, 0x2E02, Pi), (0x2E03, 0x2E03, Pf),
    (0x2E04, 0x2E04, Pi), (0x2E05, 0x2E05, Pf), (0x2E06, 0x2E08, Po),
    (0x2E09, 0x2E09, Pi), (0x2E0A, 0x2E0A, Pf), (0x2E0B, 0x2E0B, Po),
    (0x2E0C, 0x2E0C, Pi), (0x2E0D, 0x2E0D, Pf), (0x2E0E, 0x2E16, Po),
    (0x2E17, 0x2E17, Pd), (0x2E18, 0x2E19, Po), (0x2E1A, 0x2E1A, Pd),
    (0x2E1B, 0x2E1B, Po), (0x2E1C, 0x2E1C, Pi), (0x2E1D, 0x2E1D, Pf),
    (0x2E1E, 0x2E1F, Po), (0x2E20, 0x2E20, Pi), (0x2E21, 0x2E21, Pf),
    (0x2E22, 0x2E22, Ps), (0x2E23, 0x2E23, Pe), (0x2E24, 0x2E24, Ps),
    (0x2E25, 0x2E25, Pe), (0x2E26, 0x2E26, Ps), (0x2E27, 0x2E27, Pe),
    (0x2E28, 0x2E28, Ps), (0x2E29, 0x2E29, Pe), (0x2E2A, 0x2E2E, Po),
    (0x2E2F, 0x2E2F, Lm), (0x2E30, 0x2E39, Po), (0x2E3A, 0x2E3B, Pd),
    (0x2E3C, 0x2E3F, Po), (0x2E40, 0x2E40, Pd), (0x2E41, 0x2E41, Po),
    (0x2E42, 0x2E42, Ps), (0x2E43, 0x2E4F, Po), (0x2E50, 0x2E51, So),
    (0x2E52, 0x2E54, Po), (0x2E55, 0x2E55, Ps), (0x2E56, 0x2E56, Pe),
    (0x2E57, 0x2E57, Ps), (0x2E58, 0x2E58, Pe), (0x2E59, 0x2E59, Ps),
    (0x2E5A, 0x2E5A, Pe), (0x2E5B, 0x2E5B, Ps), (0x2E5C, 0x2E5C, Pe),
    (0x2E5D, 0x2E5D, Pd), (0x2E80, 0x2E99, So), (0x2E9B, 0x2EF3, So),
    (0x2F00, 0x2FD5, So), (0x2FF0, 0x2FFB, So), (0x3000, 0x3000, Zs),
    (0x3001, 0x3003, Po), (0x3004, 0x3004, So), (0x3005, 0x3005, Lm),
    (0x3006, 0x3006, Lo), (0x3007, 0x3007, Nl), (0x3008, 0x3008, Ps),
    (0x3009, 0x3009, Pe), (0x300A, 0x300A, Ps), (0x300B, 0x300B, Pe),
    (0x300C, 0x300C, Ps), (0x300D, 0x300D, Pe), (0x300E, 0x300E, Ps),
    (0x300F, 0x300F, Pe), (0x3010, 0x3010, Ps), (0x3011, 0x3011, Pe),
    (0x3012, 0x3013, So), (0x3014, 0x3014, Ps), (0x3015, 0x3015, Pe),
    (0x3016, 0x3016, Ps), (0x3017, 0x3017, Pe), (0x3018, 0x3018, Ps),
    (0x3019, 0x3019, Pe), (0x301A, 0x301A, Ps), (0x301B, 0x301B, Pe),
    (0x301C, 0x301C, Pd), (0x301D, 0x301D, Ps), (0x301E, 0x301F, Pe),
    (0x3020, 0x3020, So), (0x3021, 0x3029, Nl), (0x302A, 0x302D, Mn),
    (0x302E, 0x302F, Mc), (0x3030, 0x3030, Pd), (0x3031, 0x3035, Lm),
    (0x3036, 0x3037, So), (0x3038, 0x303A, Nl), (0x303B, 0x303B, Lm),
    (0x303C, 0x303C, Lo), (0x303D, 0x303D, Po), (0x303E, 0x303F, So),
    (0x3041, 0x3096, Lo), (0x3099, 0x309A, Mn), (0x309B, 0x309C, Sk),
    (0x309D, 0x309E, Lm), (0x309F, 0x309F, Lo), (0x30A0, 0x30A0, Pd),
    (0x30A1, 0x30FA, Lo), (0x30FB, 0x30FB, Po), (0x30FC, 0x30FE, Lm),
    (0x30FF, 0x30FF, Lo), (0x3105, 0x312F, Lo), (0x3131, 0x318E, Lo),
    (0x3190, 0x3191, So), (0x3192, 0x3195, No), (0x3196, 0x319F, So),
    (0x31A0, 0x31BF, Lo), (0x31C0, 0x31E3, So), (0x31F0, 0x31FF, Lo),
    (0x3200, 0x321E, So), (0x3220, 0x3229, No), (0x322A, 0x3247, So),
    (0x3248, 0x324F, No), (0x3250, 0x3250, So), (0x3251, 0x325F, No),
    (0x3260, 0x327F, So), (0x3280, 0x3289, No), (0x328A, 0x32B0, So),
    (0x32B1, 0x32BF, No), (0x32C0, 0x33FF, So), (0x3400, 0x4DBF, Lo),
    (0x4DC0, 0x4DFF, So), (0x4E00, 0xA014, Lo), (0xA015, 0xA015, Lm),
    (0xA016, 0xA48C, Lo), (0xA490, 0xA4C6, So), (0xA4D0, 0xA4F7, Lo),
    (0xA4F8, 0xA4FD, Lm), (0xA4FE, 0xA4FF, Po), (0xA500, 0xA60B, Lo),
    (0xA60C, 0xA60C, Lm), (0xA60D, 0xA60F, Po), (0xA610, 0xA61F, Lo),
    (0xA620, 0xA629, Nd), (0xA62A, 0xA62B, Lo), (0xA640, 0xA640, Lu),
    (0xA641, 0xA641, Ll), (0xA642, 0xA642, Lu), (0xA643, 0xA643, Ll),
    (0xA644, 0xA644, Lu), (0xA645, 0xA645, Ll), (0xA646, 0xA646, Lu),
    (0xA647, 0xA647, Ll), (0xA648, 0xA648, Lu), (0xA649, 0xA649, Ll),
    (0xA64A, 0xA64A, Lu), (0xA64B, 0xA64B, Ll), (0xA64C, 0xA64C, Lu),
    (0xA64D, 0xA64D, Ll), (0xA64E, 0xA64E, Lu), (0xA64F, 0xA64F, Ll),
    (0xA650, 0xA650, Lu), (0xA651, 0xA651, Ll), (0xA652, 0xA652, Lu),
    (0xA653, 0xA653, Ll), (0xA654, 0xA654, Lu), (0xA655, 0xA655, Ll),
    (0xA656, 0xA656, Lu), (0xA657, 0xA657, Ll), (0xA658, 0xA658, Lu),
    (0xA659, 0xA659, Ll), (0xA65A, 0xA65A, Lu), (0xA65B, 0xA65B, Ll),
    (0xA65C, 0xA65C, Lu), (0xA65D, 0xA65D, Ll), (0xA65E, 0xA65E, Lu),
    (0xA65F, 0xA65F, Ll), (0xA660, 0xA660, Lu), (0xA661, 0xA661, Ll),
    (0xA662, 0xA662, Lu), (0xA663, 0xA663, Ll), (0xA664, 0xA664, Lu),
    (0xA665, 0xA665, Ll), (0xA666, 0xA666, Lu), (0xA667, 0xA667, Ll),
    (0xA668, 0xA668, Lu), (0xA669, 0xA669, Ll), (0xA66A, 0xA66A, Lu),
    (0xA66B, 0xA66B, Ll), (0xA66C, 0xA66C, Lu), (0xA66D, 0xA66D, Ll),
    (0xA66E, 0xA66E, Lo), (0xA66F, 0xA66F, Mn), (0xA670, 0xA672, Me),
    (0xA673, 0xA673, Po), (0xA674, 0xA67D, Mn), (0xA67E, 0xA67E, Po),
    (0xA67F, 0xA67F, Lm), (0xA680, 0xA680, Lu), (0xA681, 0xA681, Ll),
    (0xA682, 0xA682, Lu), (0xA683, 0xA683, Ll), (0xA684, 0xA684, Lu),
    (0xA685, 0xA685, Ll), (0xA686, 0xA686, Lu), (0xA687, 0xA687, Ll),
    (0xA688, 0xA688, Lu), (0xA689, 0xA689, Ll), (0xA68A, 0xA68A, Lu),
    (0xA68B, 0xA68B, Ll), (0xA68C, 0xA68C, Lu), (0xA68D, 0xA68D, Ll),
    (0xA68E, 0xA68E, Lu), (0xA68F, 0xA68F, Ll), (0xA690, 0xA690, Lu),
    (0xA691, 0xA691, Ll), (0xA692, 0xA692, Lu), (0xA693, 0xA693, Ll),
    (0xA694, 0xA694, Lu), (0xA695, 0xA695, Ll), (0xA696, 0xA696, Lu),
    (0xA697, 0xA697, Ll), (0xA698, 0xA698, Lu), (0xA699, 0xA699, Ll),
    (0xA69A, 0xA69A, Lu), (0xA69B, 0xA69B, Ll), (0xA69C, 0xA69D, Lm),
    (0xA69E, 0xA69F, Mn), (0xA6A0, 0xA6E5, Lo), (0xA6E6, 0xA6EF, Nl),
    (0xA6F0, 0xA6F1, Mn), (0xA6F2, 0xA6F7, Po), (0xA700, 0xA716, Sk),
    (0xA717, 0xA71F, Lm), (0xA720, 0xA721, Sk), (0xA722, 0xA722, Lu),
    (0xA723, 0xA723, Ll), (0xA724, 0xA724, Lu), (0xA725, 0xA725, Ll),
    (0xA726, 0xA726, Lu), (0xA727, 0xA727, Ll), (0xA728, 0xA728, Lu),
    (0xA729, 0xA729, Ll), (0xA72A, 0xA72A, Lu), (0xA72B, 0xA72B, Ll),
    (0xA72C, 0xA72C, Lu), (0xA72D, 0xA72D, Ll), (0xA72E, 0xA72E, Lu),
    (0xA72F, 0xA731, Ll), (0xA732, 0xA732, Lu), (0xA733, 0xA733, Ll),
    (0xA734, 0xA734, Lu), (0xA735, 0xA735, Ll), (0xA736, 0xA736, Lu),
    (0xA737, 0xA737, Ll), (0xA738, 0xA738, Lu), (0xA739, 0xA739, Ll),
    (0xA73A, 0xA73A, Lu), (0xA73B, 0xA73B, Ll), (0xA73C, 0xA73C, Lu),
    (0xA73D, 0xA73D, Ll), (0xA73E, 0xA73E, Lu), (0xA73F, 0xA73F, Ll),
    (0xA740, 0xA740, Lu), (0xA741, 0xA741, Ll), (0xA742, 0xA742, Lu),
    (0xA743, 0xA743, Ll), (0xA744, 0xA744, Lu), (0xA745, 0xA745, Ll),
    (0xA746, 0xA746, Lu), (0xA747, 0xA747, Ll), (0xA748, 0xA748, Lu),
    (0xA749, 0xA749, Ll), (0xA74A, 0xA74A, Lu), (0xA74B, 0xA74B, Ll),
    (0xA74C, 0xA74C, Lu), (0xA74D, 0xA74D, Ll), (0xA74E, 0xA74E, Lu),
    (0xA74F, 0xA74F, Ll), (0xA750, 0xA750, Lu), (0xA751, 0xA751, Ll),
    (0xA752, 0xA752, Lu), (0xA753, 0xA753, Ll), (0xA754, 0xA754, Lu),
    (0xA755, 0xA755, Ll), (0xA756, 0xA756, Lu), (0xA757, 0xA757, Ll),
    (0xA758, 0xA758, Lu), (0xA759, 0xA759, Ll), (0xA75A, 0xA75A, Lu),
    (0xA75B, 0xA75B, Ll), (0xA75C, 0xA75C, Lu), (0xA75D, 0xA75D, Ll),
    (0xA75E, 0xA75E, Lu), (0xA75F, 0xA75F, Ll), (0xA760, 0xA760, Lu),
    (0xA761, 0xA761, Ll), (0xA762, 0xA762, Lu), (0xA763, 0xA763, Ll),
    (0xA764, 0xA764, Lu), (0xA765, 0xA765, Ll), (0xA766, 0xA766, Lu),
    (0xA767, 0xA767, Ll), (0xA768, 0xA768, Lu), (0xA769, 0xA769, Ll),
    (0xA76A, 0xA76A, Lu), (0xA76B, 0xA76B, Ll), (0xA76C, 0xA76C, Lu),
    (0xA76D, 0xA76D, Ll), (0xA76E, 0xA76E, Lu), (0xA76F, 0xA76F, Ll),
    (0xA770, 0xA770, Lm), (0xA771, 0xA778, Ll), (0xA779, 0xA779, Lu),
    (0xA77A, 0xA77A, Ll), (0xA77B, 0xA77B, Lu), (0xA77C, 0xA77C, Ll),
    (0xA77D, 0xA77E, Lu), (0xA77F, 0xA77F, Ll), (0xA780, 0xA780, Lu),
    (0xA781, 0xA781, Ll), (0xA782, 0xA782, Lu), (0xA783, 0xA783, Ll),
    (0xA784, 0xA784, Lu), (0xA785, 0xA785, Ll), (0xA786, 0xA786, Lu),
    (0xA787, 0xA787, Ll), (0xA788, 0xA788, Lm), (0xA789, 0xA78A, Sk),
    (0xA78B, 0xA78B, Lu), (0xA78C, 0xA78C, Ll), (0xA78D, 0xA78D, Lu),
    (0xA78E, 0xA78E, Ll), (0xA78F, 0xA78F, Lo), (0xA790, 0xA790, Lu),
    (0xA791, 0xA791, Ll), (0xA792, 0xA792, Lu), (0xA793, 0xA795, Ll),
    (0xA796, 0xA796, Lu), (0xA797, 0xA797, Ll), (0xA798, 0xA798, Lu),
    (0xA799, 0xA799, Ll), (0xA79A, 0xA79A, Lu), (0xA79B, 0xA79B, Ll),
    (0xA79C, 0xA79C, Lu), (0xA79D, 0xA79D, Ll), (0xA79E, 0xA79E, Lu),
    (0xA79F, 0xA79F, Ll), (0xA7A0, 0xA7A0, Lu), (0xA7A1, 0xA7A1, Ll),
    (0xA7A2, 0xA7A2, Lu), (0xA7A3, 0xA7A3, Ll), (0xA7A4, 0xA7A4, Lu),
    (0xA7A5, 0xA7A5, Ll), (0xA7A6, 0xA7A6, Lu), (0xA7A7, 0xA7A7, Ll),
    (0xA7A8, 0xA7A8, Lu), (0xA7A9, 0xA7A9, Ll), (0xA7AA, 0xA7AE, Lu),
    (0xA7AF, 0xA7AF, Ll), (0xA7B0, 0xA7B4, Lu), (0xA7B5, 0xA7B5, Ll),
    (0xA7B6, 0xA7B6, Lu), (0xA7B7, 0xA7B7, Ll), (0xA7B8, 0xA7B8, Lu),
    (0xA7B9, 0xA7B9, Ll), (0xA7BA, 0xA7BA, Lu), (0xA7BB, 0xA7BB, Ll),
    (0xA7BC, 0xA7BC, Lu), (0xA7BD, 0xA7BD, Ll), (0xA7BE, 0xA7BE, Lu),
    (0xA7BF, 0xA7BF, Ll), (0xA7C0, 0xA7C0, Lu), (0xA7C1, 0xA7C1, Ll),
    (0xA7C2, 0xA7C2, Lu), (0xA7C3, 0xA7C3, Ll), (0xA7C4, 0xA7C7, Lu),
    (0xA7C8, 0xA7C8, Ll), (0xA7C9, 0xA7C9, Lu), (0xA7CA, 0xA7CA, Ll),
    (0xA7D0, 0xA7D0, Lu), (0xA7D1, 0xA7D1, Ll), (0xA7D3, 0xA7D3, Ll),
    (0xA7D5, 0xA7D5, Ll), (0xA7D6, 0xA7D6, Lu), (0xA7D7, 0xA7D7, Ll),
    (0xA7D8, 0xA7D8, Lu), (0xA7D9, 0xA7D9, Ll), (0xA7F2, 0xA7F4, Lm),
    (0xA7F5, 0xA7F5, Lu), (0xA7F6, 0xA7F6, Ll), (0xA7F7, 0xA7F7, Lo),
    (0xA7F8, 0xA7F9, Lm), (0xA7FA, 0xA7FA, Ll), (0xA7FB, 0xA801, Lo),
    (0xA802, 0xA802, Mn), (0xA803, 0xA805, Lo), (0xA806, 0xA806, Mn),
    (0xA807, 0xA80A, Lo), (0xA80B, 0xA80B, Mn), (0xA80C, 0xA822, Lo),
    (0xA823, 0xA824, Mc), (0xA825, 0xA826, Mn), (0xA827, 0xA827, Mc),
    (0xA828, 0xA82B, So), (0xA82C, 0xA82C, Mn), (0xA830, 0xA835, No),
    (0xA836, 0xA837, So), (0xA838, 0xA838, Sc), (0xA839, 0xA839, So),
    (0xA840, 0xA873, Lo), (0xA874, 0xA877, Po), (0xA880, 0xA881, Mc),
    (0xA882, 0xA8B3, Lo), (0xA8B4, 0xA8C3, Mc), (0xA8C4, 0xA8C5, Mn),
    (0xA8CE, 0xA8CF, Po), (0xA8D0, 0xA8D9, Nd), (0xA8E0, 0xA8F1, Mn),
    (0xA8F2, 0xA8F7, Lo), (0xA8F8, 0xA8FA, Po), (0xA8FB, 0xA8FB, Lo),
    (0xA8FC, 0xA8FC, Po), (0xA8FD, 0xA8FE, Lo), (0xA8FF, 0xA8FF, Mn),
    (0xA900, 0xA909, Nd), (0xA90A, 0xA925, Lo), (0xA926, 0xA92D, Mn),
    (0xA92E, 0xA92F, Po), (0xA930, 0xA946, Lo), (0xA947, 0xA951, Mn),
    (0xA952, 0xA953, Mc), (0xA95F, 0xA95F, Po), (0xA960, 0xA97C, Lo),
    (0xA980, 0xA982, Mn), (0xA983, 0xA983, Mc), (0xA984, 0xA9B2, Lo),
    (0xA9B3, 0xA9B3, Mn), (0xA9B4, 0xA9B5, Mc), (0xA9B6, 0xA9B9, Mn),
    (0xA9BA, 0xA9BB, Mc), (0xA9BC, 0xA9BD, Mn), (0xA9BE, 0xA9C0, Mc),
    (0xA9C1, 0xA9CD, Po), (0xA9CF, 0xA9CF, Lm), (0xA9D0, 0xA9D9, Nd),
    (0xA9DE, 0xA9DF, Po), (0xA9E0, 0xA9E4, Lo), (0xA9E5, 0xA9E5, Mn),
    (0xA9E6, 0xA9E6, Lm), (0xA9E7, 0xA9EF, Lo), (0xA9F0, 0xA9F9, Nd),
    (0xA9FA, 0xA9FE, Lo), (0xAA00, 0xAA28, Lo), (0xAA29, 0xAA2E, Mn),
    (0xAA2F, 0xAA30, Mc), (0xAA31, 0xAA32, Mn), (0xAA33, 0xAA34, Mc),
    (0xAA35, 0xAA36, Mn), (0xAA40, 0xAA42, Lo), (0xAA43, 0xAA43, Mn),
    (0xAA44, 0xAA4B, Lo), (0xAA4C, 0xAA4C, Mn), (0xAA4D, 0xAA4D, Mc),
    (0xAA50, 0xAA59, Nd), (0xAA5C, 0xAA5F, Po), (0xAA60, 0xAA6F, Lo),
    (0xAA70, 0xAA70, Lm), (0xAA71, 0xAA76, Lo), (0xAA77, 0xAA79, So),
    (0xAA7A, 0xAA7A, Lo), (0xAA7B, 0xAA7B, Mc), (0xAA7C, 0xAA7C, Mn),
    (0xAA7D, 0xAA7D, Mc), (0xAA7E, 0xAAAF, Lo), (0xAAB0, 0xAAB0, Mn),
    (0xAAB1, 0xAAB1, Lo), (0xAAB2, 0xAAB4, Mn), (0xAAB5, 0xAAB6, Lo),
    (0xAAB7, 0xAAB8, Mn), (0xAAB9, 0xAABD, Lo), (0xAABE, 0xAABF, Mn),
    (0xAAC0, 0xAAC0, Lo), (0xAAC1, 0xAAC1, Mn), (0xAAC2, 0xAAC2, Lo),
    (0xAADB, 0xAADC, Lo), (0xAADD, 0xAADD, Lm), (0xAADE, 0xAADF, Po),
    (0xAAE0, 0xAAEA, Lo), (0xAAEB, 0xAAEB, Mc), (0xAAEC, 0xAAED, Mn),
    (0xAAEE, 0xAAEF, Mc), (0xAAF0, 0xAAF1, Po), (0xAAF2, 0xAAF2, Lo),
    (0xAAF3, 0xAAF4, Lm), (0xAAF5, 0xAAF5, Mc), (0xAAF6, 0xAAF6, Mn),
    (0xAB01, 0xAB06, Lo), (0xAB09, 0xAB0E, Lo), (0xAB11, 0xAB16, Lo),
    (0xAB20, 0xAB26, Lo), (0xAB28, 0xAB2E, Lo), (0xAB30, 0xAB5A, Ll),
    (0xAB5B, 0xAB5B, Sk), (0xAB5C, 0xAB5F, Lm), (0xAB60, 0xAB68, Ll),
    (0xAB69, 0xAB69, Lm), (0xAB6A, 0xAB6B, Sk), (0xAB70, 0xABBF, Ll),
    (0xABC0, 0xABE2, Lo), (0xABE3, 0xABE4, Mc), (0xABE5, 0xABE5, Mn),
    (0xABE6, 0xABE7, Mc), (0xABE8, 0xABE8, Mn), (0xABE9, 0xABEA, Mc),
    (0xABEB, 0xABEB, Po), (0xABEC, 0xABEC, Mc), (0xABED, 0xABED, Mn),
    (0xABF0, 0xABF9, Nd), (0xAC00, 0xD7A3, Lo), (0xD7B0, 0xD7C6, Lo),
    (0xD7CB, 0xD7FB, Lo), (0xD800, 0xDFFF, Cs), (0xE000, 0xF8FF, Co),
    (0xF900, 0xFA6D, Lo), (0xFA70, 0xFAD9, Lo), (0xFB00, 0xFB06, Ll),
    (0xFB13, 0xFB17, Ll), (0xFB1D, 0xFB1D, Lo), (0xFB1E, 0xFB1E, Mn),
    (0xFB1F, 0xFB28, Lo), (0xFB29, 0xFB29, Sm), (0xFB2A, 0xFB36, Lo),
    (0xFB38, 0xFB3C, Lo), (0xFB3E, 0xFB3E, Lo), (0xFB40, 0xFB41, Lo),
    (0xFB43, 0xFB44, Lo), (0xFB46, 0xFBB1, Lo), (0xFBB2, 0xFBC2, Sk),
    (0xFBD3, 0xFD3D, Lo), (0xFD3E, 0xFD3E, Pe), (0xFD3F, 0xFD3F, Ps),
    (0xFD40, 0xFD4F, So), (0xFD50, 0xFD8F, Lo), (0xFD92, 0xFDC7, Lo),
    (0xFDCF, 0xFDCF, So), (0xFDF0, 0xFDFB, Lo), (0xFDFC, 0xFDFC, Sc),
    (0xFDFD, 0xFDFF, So), (0xFE00, 0xFE0F, Mn), (0xFE10, 0xFE16, Po),
    (0xFE17, 0xFE17, Ps), (0xFE18, 0xFE18, Pe), (0xFE19, 0xFE19, Po),
    (0xFE20, 0xFE2F, Mn), (0xFE30, 0xFE30, Po), (0xFE31, 0xFE32, Pd),
    (0xFE33, 0xFE34, Pc), (0xFE35, 0xFE35, Ps), (0xFE36, 0xFE36, Pe),
    (0xFE37, 0xFE37, Ps), (0xFE38, 0xFE38, Pe), (0xFE39, 0xFE39, Ps),
    (0xFE3A, 0xFE3A, Pe), (0xFE3B, 0xFE3B, Ps), (0xFE3C, 0xFE3C, Pe),
    (0xFE3D, 0xFE3D, Ps), (0xFE3E, 0xFE3E, Pe), (0xFE3F, 0xFE3F, Ps),
    (0xFE40, 0xFE40, Pe), (0xFE41, 0xFE41, Ps), (0xFE42, 0xFE42, Pe),
    (0xFE43, 0xFE43, Ps), (0xFE44, 0xFE44, Pe), (0xFE45, 0xFE46, Po),
    (0xFE47, 0xFE47, Ps), (0xFE48, 0xFE48, Pe), (0xFE49, 0xFE4C, Po),
    (0xFE4D, 0xFE4F, Pc), (0xFE50, 0xFE52, Po), (0xFE54, 0xFE57, Po),
    (0xFE58, 0xFE58, Pd), (0xFE59, 0xFE59, Ps), (0xFE5A, 0xFE5A, Pe),
    (0xFE5B, 0xFE5B, Ps), (0xFE5C, 0xFE5C, Pe), (0xFE5D, 0xFE5D, Ps),
    (0xFE5E, 0xFE5E, Pe), (0xFE5F, 0xFE61, Po), (0xFE62, 0xFE62, Sm),
    (0xFE63, 0xFE63, Pd), (0xFE64, 0xFE66, Sm), (0xFE68, 0xFE68, Po),
    (0xFE69, 0xFE69, Sc), (0xFE6A, 0xFE6B, Po), (0xFE70, 0xFE74, Lo),
    (0xFE76, 0xFEFC, Lo), (0xFEFF, 0xFEFF, Cf), (0xFF01, 0xFF03, Po),
    (0xFF04, 0xFF04, Sc), (0xFF05, 0xFF07, Po), (0xFF08, 0xFF08, Ps),
    (0xFF09, 0xFF09, Pe), (0xFF0A, 0xFF0A, Po), (0xFF0B, 0xFF0B, Sm),
    (0xFF0C, 0xFF0C, Po), (0xFF0D, 0xFF0D, Pd), (0xFF0E, 0xFF0F, Po),
    (0xFF10, 0xFF19, Nd), (0xFF1A, 0xFF1B, Po), (0xFF1C, 0xFF1E, Sm),
    (0xFF1F, 0xFF20, Po), (0xFF21, 0xFF3A, Lu), (0xFF3B, 0xFF3B, Ps),
    (0xFF3C, 0xFF3C, Po), (0xFF3D, 0xFF3D, Pe), (0xFF3E, 0xFF3E, Sk),
    (0xFF3F, 0xFF3F, Pc), (0xFF40, 0xFF40, Sk), (0xFF41, 0xFF5A, Ll),
    (0xFF5B, 0xFF5B, Ps), (0xFF5C, 0xFF5C, Sm), (0xFF5D, 0xFF5D, Pe),
    (0xFF5E, 0xFF5E, Sm), (0xFF5F, 0xFF5F, Ps), (0xFF60, 0xFF60, Pe),
    (0xFF61, 0xFF61, Po), (0xFF62, 0xFF62, Ps), (0xFF63, 0xFF63, Pe),
    (0xFF64, 0xFF65, Po), (0xFF66, 0xFF6F, Lo), (0xFF70, 0xFF70, Lm),
    (0xFF71, 0xFF9D, Lo), (0xFF9E, 0xFF9F, Lm), (0xFFA0, 0xFFBE, Lo),
    (0xFFC2, 0xFFC7, Lo), (0xFFCA, 0xFFCF, Lo), (0xFFD2, 0xFFD7, Lo),
    (0xFFDA, 0xFFDC, Lo), (0xFFE0, 0xFFE1, Sc), (0xFFE2, 0xFFE2, Sm),
    (0xFFE3, 0xFFE3, Sk), (0xFFE4, 0xFFE4, So), (0xFFE5, 0xFFE6, Sc),
    (0xFFE8, 0xFFE8, So), (0xFFE9, 0xFFEC, Sm), (0xFFED, 0xFFEE, So),
    (0xFFF9, 0xFFFB, Cf), (0xFFFC, 0xFFFD, So), (0x10000, 0x1000B, Lo),
    (0x1000D, 0x10026, Lo), (0x10028, 0x1003A, Lo), (0x1003C, 0x1003D, Lo),
    (0x1003F, 0x1004D, Lo), (0x10050, 0x1005D, Lo), (0x10080, 0x100FA, Lo),
    (0x10100, 0x10102, Po), (0x10107, 0x10133, No), (0x10137, 0x1013F, So),
    (0x10140, 0x10174, Nl), (0x10175, 0x10178, No), (0x10179, 0x10189, So),
    (0x1018A, 0x1018B, No), (0x1018C, 0x1018E, So), (0x10190, 0x1019C, So),
    (0x101A0, 0x101A0, So), (0x101D0, 0x101FC, So), (0x101FD, 0x101FD, Mn),
    (0x10280, 0x1029C, Lo), (0x102A0, 0x102D0, Lo), (0x102E0, 0x102E0, Mn),
    (0x102E1, 0x102FB, No), (0x10300, 0x1031F, Lo), (0x10320, 0x10323, No),
    (0x1032D, 0x10340, Lo), (0x10341, 0x10341, Nl), (0x10342, 0x10349, Lo),
    (0x1034A, 0x1034A, Nl), (0x10350, 0x10375, Lo), (0x10376, 0x1037A, Mn),
    (0x10380, 0x1039D, Lo), (0x1039F, 0x1039F, Po), (0x103A0, 0x103C3, Lo),
    (0x103C8, 0x103CF, Lo), (0x103D0, 0x103D0, Po), (0x103D1, 0x103D5, Nl),
    (0x10400, 0x10427, Lu), (0x10428, 0x1044F, Ll), (0x10450, 0x1049D, Lo),
    (0x104A0, 0x104A9, Nd), (0x104B0, 0x104D3, Lu), (0x104D8, 0x104FB, Ll),
    (0x10500, 0x10527, Lo), (0x10530, 0x10563, Lo), (0x1056F, 0x1056F, Po),
    (0x10570, 0x1057A, Lu), (0x1057C, 0x1058A, Lu), (0x1058C, 0x10592, Lu),
    (0x10594, 0x10595, Lu), (0x10597, 0x105A1, Ll), (0x105A3, 0x105B1, Ll),
    (0x105B3, 0x105B9, Ll), (0x105BB, 0x105BC, Ll), (0x10600, 0x10736, Lo),
    (0x10740, 0x10755, Lo), (0x10760, 0x10767, Lo), (0x10780, 0x10785, Lm),
    (0x10787, 0x107B0, Lm), (0x107B2, 0x107BA, Lm), (0x10800, 0x10805, Lo),
    (0x10808, 0x10808, Lo), (0x1080A, 0x10835, Lo), (0x10837, 0x10838, Lo),
    (0x1083C, 0x1083C, Lo), (0x1083F, 0x10855, Lo), (0x10857, 0x10857, Po),
    (0x10858, 0x1085F, No), (0x10860, 0x10876, Lo), (0x10877, 0x10878, So),
    (0x10879, 0x1087F, No), (0x10880, 0x1089E, Lo), (0x108A7, 0x108AF, No),
    (0x108E0, 0x108F2, Lo), (0x108F4, 0x108F5, Lo), (0x108FB, 0x108FF, No),
    (0x10900, 0x10915, Lo), (0x10916, 0x1091B, No), (0x1091F, 0x1091F, Po),
    (0x10920, 0x10939, Lo), (0x1093F, 0x1093F, Po), (0x10980, 0x109B7, Lo),
    (0x109BC, 0x109BD, No), (0x109BE, 0x109BF, Lo), (0x109C0, 0x109CF, No),
    (0x109D2, 0x109FF, No), (0x10A00, 0x10A00, Lo), (0x10A01, 0x10A03, Mn),
    (0x10A05, 0x10A06, Mn), (0x10A0C, 0x10A0F, Mn), (0x10A10, 0x10A13, Lo),
    (0x10A15, 0x10A17, Lo), (0x10A19, 0x10A35, Lo), (0x10A38, 0x10A3A, Mn),
    (0x10A3F, 0x10A3F, Mn), (0x10A40, 0x10A48, No), (0x10A50, 0x10A58, Po),
    (0x10A60, 0x10A7C, Lo), (0x10A7D, 0x10A7E, No), (0x10A7F, 0x10A7F, Po),
    (0x10A80, 0x10A9C, Lo), (0x10A9D, 0x10A9F, No), (0x10AC0, 0x10AC7, Lo),
    (0x10AC8, 0x10AC8, So), (0x10AC9, 0x10AE4, Lo), (0x10AE5, 0x10AE6, Mn),
    (0x10AEB, 0x10AEF, No), (0x10AF0, 0x10AF6, Po), (0x10B00, 0x10B35, Lo),
    (0x10B39, 0x10B3F, Po), (0x10B40, 0x10B55, Lo), (0x10B58, 0x10B5F, No),
    (0x10B60, 0x10B72, Lo), (0x10B78, 0x10B7F, No), (0x10B80, 0x10B91, Lo),
    (0x10B99, 0x10B9C, Po), (0x10BA9, 0x10BAF, No), (0x10C00, 0x10C48, Lo),
    (0x10C80, 0x10CB2, Lu), (0x10CC0, 0x10CF2, Ll), (0x10CFA, 0x10CFF, No),
    (0x10D00, 0x10D23, Lo), (0x10D24, 0x10D27, Mn), (0x10D30, 0x10D39, Nd),
    (0x10E60, 0x10E7E, No), (0x10E80, 0x10EA9, Lo), (0x10EAB, 0x10EAC, Mn),
    (0x10EAD, 0x10EAD, Pd), (0x10EB0, 0x10EB1, Lo), (0x10F00, 0x10F1C, Lo),
    (0x10F1D, 0x10F26, No), (0x10F27, 0x10F27, Lo), (0x10F30, 0x10F45, Lo),
    (0x10F46, 0x10F50, Mn), (0x10F51, 0x10F54, No), (0x10F55, 0x10F59, Po),
    (0x10F70, 0x10F81, Lo), (0x10F82, 0x10F85, Mn), (0x10F86, 0x10F89, Po),
    (0x10FB0, 0x10FC4, Lo), (0x10FC5, 0x10FCB, No), (0x10FE0, 0x10FF6, Lo),
    (0x11000, 0x11000, Mc), (0x11001, 0x11001, Mn), (0x11002, 0x11002, Mc),
    (0x11003, 0x11037, Lo), (0x11038, 0x11046, Mn), (0x11047, 0x1104D, Po),
    (0x11052, 0x11065, No), (0x11066, 0x1106F, Nd), (0x11070, 0x11070, Mn),
    (0x11071, 0x11072, Lo), (0x11073, 0x11074, Mn), (0x11075, 0x11075, Lo),
    (0x1107F, 0x11081, Mn), (0x11082, 0x11082, Mc), (0x11083, 0x110AF, Lo),
    (0x110B0, 0x110B2, Mc), (0x110B3, 0x110B6, Mn), (0x110B7, 0x110B8, Mc),
    (0x110B9, 0x110BA, Mn), (0x110BB, 0x110BC, Po), (0x110BD, 0x110BD, Cf),
    (0x110BE, 0x110C1, Po), (0x110C2, 0x110C2, Mn), (0x110CD, 0x110CD, Cf),
    (0x110D0, 0x110E8, Lo), (0x110F0, 0x110F9, Nd), (0x11100, 0x11102, Mn),
    (0x11103, 0x11126, Lo), (0x11127, 0x1112B, Mn), (0x1112C, 0x1112C, Mc),
    (0x1112D, 0x11134, Mn), (0x11136, 0x1113F, Nd), (0x11140, 0x11143, Po),
    (0x11144, 0x11144, Lo), (0x11145, 0x11146, Mc), (0x11147, 0x11147, Lo),
    (0x11150, 0x11172, Lo), (0x11173, 0x11173, Mn), (0x11174, 0x11175, Po),
    (0x11176, 0x11176, Lo), (0x11180, 0x11181, Mn), (0x11182, 0x11182, Mc),
    (0x11183, 0x111B2, Lo), (0x111B3, 0x111B5, Mc), (0x111B6, 0x111BE, Mn),
    (0x111BF, 0x111C0, Mc), (0x111C1, 0x111C4, Lo), (0x111C5, 0x111C8, Po),
    (0x111C9, 0x111CC, Mn), (0x111CD, 0x111CD, Po), (0x111CE, 0x111CE, Mc),
    (0x111CF, 0x111CF, Mn), (0x111D0, 0x111D9, Nd), (0x111DA, 0x111DA, Lo),
    (0x111DB, 0x111DB, Po), (0x111DC, 0x111DC, Lo), (0x111DD, 0x111DF, Po),
    (0x111E1, 0x111F4, No), (0x11200, 0x11211, Lo), (0x11213, 0x1122B, Lo),
    (0x1122C, 0x1122E, Mc), (0x1122F, 0x11231, Mn), (0x11232, 0x11233, Mc),
    (0x11234, 0x11234, Mn), (0x11235, 0x11235, Mc), (0x11236, 0x11237, Mn),
    (0x11238, 0x1123D, Po), (0x1123E, 0x1123E, Mn), (0x11280, 0x11286, Lo),
    (0x11288, 0x11288, Lo), (0x1128A, 0x1128D, Lo), (0x1128F, 0x1129D, Lo),
    (0x1129F, 0x112A8, Lo), (0x112A9, 0x112A9, Po), (0x112B0, 0x112DE, Lo),
    (0x112DF, 0x112DF, Mn), (0x112E0, 0x112E2, Mc), (0x112E3, 0x112EA, Mn),
    (0x112F0, 0x112F9, Nd), (0x11300, 0x11301, Mn), (0x11302, 0x11303, Mc),
    (0x11305, 0x1130C, Lo), (0x1130F, 0x11310, Lo), (0x11313, 0x11328, Lo),
    (0x1132A, 0x11330, Lo), (0x11332, 0x11333, Lo), (0x11335, 0x11339, Lo),
    (0x1133B, 0x1133C, Mn), (0x1133D, 0x1133D, Lo), (0x1133E, 0x1133F, Mc),
    (0x11340, 0x11340, Mn), (0x11341, 0x11344, Mc), (0x11347, 0x11348, Mc),
    (0x1134B, 0x1134D, Mc), (0x11350, 0x11350, Lo), (0x11357, 0x11357, Mc),
    (0x1135D, 0x11361, Lo), (0x11362, 0x11363, Mc), (0x11366, 0x1136C, Mn),
    (0x11370, 0x11374, Mn), (0x11400, 0x11434, Lo), (0x11435, 0x11437, Mc),
    (0x11438, 0x1143F, Mn), (0x11440, 0x11441, Mc), (0x11442, 0x11444, Mn),
    (0x11445, 0x11445, Mc), (0x11446, 0x11446, Mn), (0x11447, 0x1144A, Lo),
    (0x1144B, 0x1144F, Po), (0x11450, 0x11459, Nd), (0x1145A, 0x1145B, Po),
    (0x1145D, 0x1145D, Po), (0x1145E, 0x1145E, Mn), (0x1145F, 0x11461, Lo),
    (0x11480, 0x114AF, Lo), (0x114B0, 0x114B2, Mc), (0x114B3, 0x114B8, Mn),
    (0x114B9, 0x114B9, Mc), (0x114BA, 0x114BA, Mn), (0x114BB, 0x114BE, Mc),
    (0x114BF, 0x114C0, Mn), (0x114C1, 0x114C1, Mc), (0x114C2, 0x114C3, Mn),
    (0x114C4, 0x114C5, Lo), (0x114C6, 0x114C6, Po), (0x114C7, 0x114C7, Lo),
    (0x114D0, 0x114D9, Nd), (0x11580, 0x115AE, Lo), (0x115AF, 0x115B1, Mc),
    (0x115B2, 0x115B5, Mn), (0x115B8, 0x115BB, Mc), (0x115BC, 0x115BD, Mn),
    (0x115BE, 0x115BE, Mc), (0x115BF, 0x115C0, Mn), (0x115C1, 0x115D7, Po),
    (0x115D8, 0x115DB, Lo), (0x115DC, 0x115DD, Mn), (0x11600, 0x1162F, Lo),
    (0x11630, 0x11632, Mc), (0x11633, 0x1163A, Mn), (0x1163B, 0x1163C, Mc),
    (0x1163D, 0x1163D, Mn), (0x1163E, 0x1163E, Mc), (0x1163F, 0x11640, Mn),
    (0x11641, 0x11643, Po), (0x11644, 0x11644, Lo), (0x11650, 0x11659, Nd),
    (0x11660, 0x1166C, Po), (0x11680, 0x116AA, Lo), (0x116AB, 0x116AB, Mn),
    (0x116AC, 0x116AC, Mc), (0x116AD, 0x116AD, Mn), (0x116AE, 0x116AF, Mc),
    (0x116B0, 0x116B5, Mn), (0x116B6, 0x116B6, Mc), (0x116B7, 0x116B7, Mn),
    (0x116B8, 0x116B8, Lo), (0x116B9, 0x116B9, Po), (0x116C0, 0x116C9, Nd),
    (0x11700, 0x1171A, Lo), (0x1171D, 0x1171F, Mn), (0x11720, 0x11721, Mc),
    (0x11722, 0x11725, Mn), (0x11726, 0x11726, Mc), (0x11727, 0x1172B, Mn),
    (0x11730, 0x11739, Nd), (0x1173A, 0x1173B, No), (0x1173C, 0x1173E, Po),
    (0x1173F, 0x1173F, So), (0x11740, 0x11746, Lo), (0x11800, 0x1182B, Lo),
    (0x1182C, 0x1182E, Mc), (0x1182F, 0x11837, Mn), (0x11838, 0x11838, Mc),
    (0x11839, 0x1183A, Mn), (0x1183B, 0x1183B, Po), (0x118A0, 0x118BF, Lu),
    (0x118C0, 0x118DF, Ll), (0x118E0, 0x118E9, Nd), (0x118EA, 0x118F2, No),
    (0x118FF, 0x11906, Lo), (0x11909, 0x11909, Lo), (0x1190C, 0x11913, Lo),
    (0x11915, 0x11916, Lo), (0x11918, 0x1192F, Lo), (0x11930, 0x11935, Mc),
    (0x11937, 0x11938, Mc), (0x1193B, 0x1193C, Mn), (0x1193D, 0x1193D, Mc),
    (0x1193E, 0x1193E, Mn), (0x1193F, 0x1193F, Lo), (0x11940, 0x11940, Mc),
    (0x11941, 0x11941, Lo), (0x11942, 0x11942, Mc), (0x11943, 0x11943, Mn),
    (0x11944, 0x11946, Po), (0x11950, 0x11959, Nd), (0x119A0, 0x119A7, Lo),
    (0x119AA, 0x119D0, Lo), (0x119D1, 0x119D3, Mc), (0x119D4, 0x119D7, Mn),
    (0x119DA, 0x119DB, Mn), (0x119DC, 0x119DF, Mc), (0x119E0, 0x119E0, Mn),
    (0x119E1, 0x119E1, Lo), (0x119E2, 0x119E2, Po), (0x119E3, 0x119E3, Lo),
    (0x119E4, 0x119E4, Mc), (0x11A00, 0x11A00, Lo), (0x11A01, 0x11A0A, Mn),
    (0x11A0B, 0x11A32, Lo), (0x11A33, 0x11A38, Mn), (0x11A39, 0x11A39, Mc),
    (0x11A3A, 0x11A3A, Lo), (0x11A3B, 0x11A3E, Mn), (0x11A3F, 0x11A46, Po),
    (0x11A47, 0x11A47, Mn), (0x11A50, 0x11A50, Lo), (0x11A51, 0x11A56, Mn),
    (0x11A57, 0x11A58, Mc), (0x11A59, 0x11A5B, Mn), (0x11A5C, 0x11A89, Lo),
    (0x11A8A, 0x11A96, Mn), (0x11A97, 0x11A97, Mc), (0x11A98, 0x11A99, Mn),
    (0x11A9A, 0x11A9C, Po), (0x11A9D, 0x11A9D, Lo), (0x11A9E, 0x11AA2, Po),
    (0x11AB0, 0x11AF8, Lo), (0x11C00, 0x11C08, Lo), (0x11C0A, 0x11C2E, Lo),
    (0x11C2F, 0x11C2F, Mc), (0x11C30, 0x11C36, Mn), (0x11C38, 0x11C3D, Mn),
    (0x11C3E, 0x11C3E, Mc), (0x11C3F, 0x11C3F, Mn), (0x11C40, 0x11C40, Lo),
    (0x11C41, 0x11C45, Po), (0x11C50, 0x11C59, Nd), (0x11C5A, 0x11C6C, No),
    (0x11C70, 0x11C71, Po), (0x11C72, 0x11C8F, Lo), (0x11C92, 0x11CA7, Mn),
    (0x11CA9, 0x11CA9, Mc), (0x11CAA, 0x11CB0, Mn), (0x11CB1, 0x11CB1, Mc),
    (0x11CB2, 0x11CB3, Mn), (0x11CB4, 0x11CB4, Mc), (0x11CB5, 0x11CB6, Mn),
    (0x11D00, 0x11D06, Lo), (0x11D08, 0x11D09, Lo), (0x11D0B, 0x11D30, Lo),
    (0x11D31, 0x11D36, Mn), (0x11D3A, 0x11D3A, Mn), (0x11D3C, 0x11D3D, Mn),
    (0x11D3F, 0x11D45, Mn), (0x11D46, 0x11D46, Lo), (0x11D47, 0x11D47, Mn),
    (0x11D50, 0x11D59, Nd), (0x11D60, 0x11D65, Lo), (0x11D67, 0x11D68, Lo),
    (0x11D6A, 0x11D89, Lo), (0x11D8A, 0x11D8E, Mc), (0x11D90, 0x11D91, Mn),
    (0x11D93, 0x11D94, Mc), (0x11D95, 0x11D95, Mn), (0x11D96, 0x11D96, Mc),
    (0x11D97, 0x11D97, Mn), (0x11D98, 0x11D98, Lo), (0x11DA0, 0x11DA9, Nd),
    (0x11EE0, 0x11EF2, Lo), (0x11EF3, 0x11EF4, Mn), (0x11EF5, 0x11EF6, Mc),
    (0x11EF7, 0x11EF8, Po), (0x11FB0, 0x11FB0, Lo), (0x11FC0, 0x11FD4, No),
    (0x11FD5, 0x11FDC, So), (0x11FDD, 0x11FE0, Sc), (0x11FE1, 0x11FF1, So),
    (0x11FFF, 0x11FFF, Po), (0x12000, 0x12399, Lo), (0x12400, 0x1246E, Nl),
    (0x12470, 0x12474, Po), (0x12480, 0x12543, Lo), (0x12F90, 0x12FF0, Lo),
    (0x12FF1, 0x12FF2, Po), (0x13000, 0x1342E, Lo), (0x13430, 0x13438, Cf),
    (0x14400, 0x14646, Lo), (0x16800, 0x16A38, Lo), (0x16A40, 0x16A5E, Lo),
    (0x16A60, 0x16A69, Nd), (0x16A6E, 0x16A6F, Po), (0x16A70, 0x16ABE, Lo),
    (0x16AC0, 0x16AC9, Nd), (0x16AD0, 0x16AED, Lo), (0x16AF0, 0x16AF4, Mn),
    (0x16AF5, 0x16AF5, Po), (0x16B00, 0x16B2F, Lo), (0x16B30, 0x16B36, Mn),
    (0x16B37, 0x16B3B, Po), (0x16B3C, 0x16B3F, So), (0x16B40, 0x16B43, Lm),
    (0x16B44, 0x16B44, Po), (0x16B45, 0x16B45, So), (0x16B50, 0x16B59, Nd),
    (0x16B5B, 0x16B61, No), (0x16B63, 0x16B77, Lo), (0x16B7D, 0x16B8F, Lo),
    (0x16E40, 0x16E5F, Lu), (0x16E60, 0x16E7F, Ll), (0x16E80, 0x16E96, No),
    (0x16E97, 0x16E9A, Po), (0x16F00, 0x16F4A, Lo), (0x16F4F, 0x16F4F, Mn),
    (0x16F50, 0x16F50, Lo), (0x16F51, 0x16F87, Mc), (0x16F8F, 0x16F92, Mn),
    (0x16F93, 0x16F9F, Lm), (0x16FE0, 0x16FE1, Lm), (0x16FE2, 0x16FE2, Po),
    (0x16FE3, 0x16FE3, Lm), (0x16FE4, 0x16FE4, Mn), (0x16FF0, 0x16FF1, Mc),
    (0x17000, 0x187F7, Lo), (0x18800, 0x18CD5, Lo), (0x18D00, 0x18D08, Lo),
    (0x1AFF0, 0x1AFF3, Lm), (0x1AFF5, 0x1AFFB, Lm), (0x1AFFD, 0x1AFFE, Lm),
    (0x1B000, 0x1B122, Lo), (0x1B150, 0x1B152, Lo), (0x1B164, 0x1B167, Lo),
    (0x1B170, 0x1B2FB, Lo), (0x1BC00, 0x1BC6A, Lo), (0x1BC70, 0x1BC7C, Lo),
    (0x1BC80, 0x1BC88, Lo), (0x1BC90, 0x1BC99, Lo), (0x1BC9C, 0x1BC9C, So),
    (0x1BC9D, 0x1BC9E, Mn), (0x1BC9F, 0x1BC9F, Po), (0x1BCA0, 0x1BCA3, Cf),
    (0x1CF00, 0x1CF2D, Mn), (0x1CF30, 0x1CF46, Mn), (0x1CF50, 0x1CFC3, So),
    (0x1D000, 0x1D0F5, So), (0x1D100, 0x1D126, So), (0x1D129, 0x1D164, So),
    (0x1D165, 0x1D166, Mc), (0x1D167, 0x1D169, Mn), (0x1D16A, 0x1D16C, So),
    (0x1D16D, 0x1D172, Mc), (0x1D173, 0x1D17A, Cf), (0x1D17B, 0x1D182, Mn),
    (0x1D183, 0x1D184, So), (0x1D185, 0x1D18B, Mn), (0x1D18C, 0x1D1A9, So),
    (0x1D1AA, 0x1D1AD, Mn), (0x1D1AE, 0x1D1EA, So), (0x1D200, 0x1D241, So),
    (0x1D242, 0x1D244, Mn), (0x1D245, 0x1D245, So), (0x1D2E0, 0x1D2F3, No),
    (0x1D300, 0x1D356, So), (0x1D360, 0x1D378, No), (0x1D400, 0x1D419, Lu),
    (0x1D41A, 0x1D433, Ll), (0x1D434, 0x1D44D, Lu), (0x1D44E, 0x1D454, Ll),
    (0x1D456, 0x1D467, Ll), (0x1D468, 0x1D481, Lu), (0x1D482, 0x1D49B, Ll),
    (0x1D49C, 0x1D49C, Lu), (0x1D49E, 0x1D49F, Lu), (0x1D4A2, 0x1D4A2, Lu),
    (0x1D4A5, 0x1D4A6, Lu), (0x1D4A9, 0x1D4AC, Lu), (0x1D4AE, 0x1D4B5, Lu),
    (0x1D4B6, 0x1D4B9, Ll), (0x1D4BB, 0x1D4BB, Ll), (0x1D4BD, 0x1D4C3, Ll),
    (0x1D4C5, 0x1D4CF, Ll), (0x1D4D0, 0x1D4E9, Lu), (0x1D4EA, 0x1D503, Ll),
    (0x1D504, 0x1D505, Lu), (0x1D507, 0x1D50A, Lu), (0x1D50D, 0x1D514, Lu),
    (0x1D516, 0x1D51C, Lu), (0x1D51E, 0x1D537, Ll), (0x1D538, 0x1D539, Lu),
    (0x1D53B, 0x1D53E, Lu), (0x1D540, 0x1D544, Lu), (0x1D546, 0x1D546, Lu),
    (0x1D54A, 0x1D550, Lu), (0x1D552, 0x1D56B, Ll), (0x1D56C, 0x1D585, Lu),
    (0x1D586, 0x1D59F, Ll), (0x1D5A0, 0x1D5B9, Lu), (0x1D5BA, 0x1D5D3, Ll),
    (0x1D5D4, 0x1D5ED, Lu), (0x1D5EE, 0x1D607, Ll), (0x1D608, 0x1D621, Lu),
    (0x1D622, 0x1D63B, Ll), (0x1D63C, 0x1D655, Lu), (0x1D656, 0x1D66F, Ll),
    (0x1D670, 0x1D689, Lu), (0x1D68A, 0x1D6A5, Ll), (0x1D6A8, 0x1D6C0, Lu),
    (0x1D6C1, 0x1D6C1, Sm), (0x1D6C2, 0x1D6DA, Ll), (0x1D6DB, 0x1D6DB, Sm),
    (0x1D6DC, 0x1D6E1, Ll), (0x1D6E2, 0x1D6FA, Lu), (0x1D6FB, 0x1D6FB, Sm),
    (0x1D6FC, 0x1D714, Ll), (0x1D715, 0x1D715, Sm), (0x1D716, 0x1D71B, Ll),
    (0x1D71C, 0x1D734, Lu), (0x1D735, 0x1D735, Sm), (0x1D736, 0x1D74E, Ll),
    (0x1D74F, 0x1D74F, Sm), (0x1D750, 0x1D755, Ll), (0x1D756, 0x1D76E, Lu),
    (0x1D76F, 0x1D76F, Sm), (0x1D770, 0x1D788, Ll), (0x1D789, 0x1D789, Sm),
    (0x1D78A, 0x1D78F, Ll), (0x1D790, 0x1D7A8, Lu), (0x1D7A9, 0x1D7A9, Sm),
    (0x1D7AA, 0x1D7C2, Ll), (0x1D7C3, 0x1D7C3, Sm), (0x1D7C4, 0x1D7C9, Ll),
    (0x1D7CA, 0x1D7CA, Lu), (0x1D7CB, 0x1D7CB, Ll), (0x1D7CE, 0x1D7FF, Nd),
    (0x1D800, 0x1D9FF, So), (0x1DA00, 0x1DA36, Mn), (0x1DA37, 0x1DA3A, So),
    (0x1DA3B, 0x1DA6C, Mn), (0x1DA6D, 0x1DA74, So), (0x1DA75, 0x1DA75, Mn),
    (0x1DA76, 0x1DA83, So), (0x1DA84, 0x1DA84, Mn), (0x1DA85, 0x1DA86, So),
    (0x1DA87, 0x1DA8B, Po), (0x1DA9B, 0x1DA9F, Mn), (0x1DAA1, 0x1DAAF, Mn),
    (0x1DF00, 0x1DF09, Ll), (0x1DF0A, 0x1DF0A, Lo), (0x1DF0B, 0x1DF1E, Ll),
    (0x1E000, 0x1E006, Mn), (0x1E008, 0x1E018, Mn), (0x1E01B, 0x1E021, Mn),
    (0x1E023, 0x1E024, Mn), (0x1E026, 0x1E02A, Mn), (0x1E100, 0x1E12C, Lo),
    (0x1E130, 0x1E136, Mn), (0x1E137, 0x1E13D, Lm), (0x1E140, 0x1E149, Nd),
    (0x1E14E, 0x1E14E, Lo), (0x1E14F, 0x1E14F, So), (0x1E290, 0x1E2AD, Lo),
    (0x1E2AE, 0x1E2AE, Mn), (0x1E2C0, 0x1E2EB, Lo), (0x1E2EC, 0x1E2EF, Mn),
    (0x1E2F0, 0x1E2F9, Nd), (0x1E2FF, 0x1E2FF, Sc), (0x1E7E0, 0x1E7E6, Lo),
    (0x1E7E8, 0x1E7EB, Lo), (0x1E7ED, 0x1E7EE, Lo), (0x1E7F0, 0x1E7FE, Lo),
    (0x1E800, 0x1E8C4, Lo), (0x1E8C7, 0x1E8CF, No), (0x1E8D0, 0x1E8D6, Mn),
    (0x1E900, 0x1E921, Lu), (0x1E922, 0x1E943, Ll), (0x1E944, 0x1E94A, Mn),
    (0x1E94B, 0x1E94B, Lm), (0x1E950, 0x1E959, Nd), (0x1E95E, 0x1E95F, Po),
    (0x1EC71, 0x1ECAB, No), (0x1ECAC, 0x1ECAC, So), (0x1ECAD, 0x1ECAF, No),
    (0x1ECB0, 0x1ECB0, Sc), (0x1ECB1, 0x1ECB4, No), (0x1ED01, 0x1ED2D, No),
    (0x1ED2E, 0x1ED2E, So), (0x1ED2F, 0x1ED3D, No), (0x1EE00, 0x1EE03, Lo),
    (0x1EE05, 0x1EE1F, Lo), (0x1EE21, 0x1EE22, Lo), (0x1EE24, 0x1EE24, Lo),
    (0x1EE27, 0x1EE27, Lo), (0x1EE29, 0x1EE32, Lo), (0x1EE34, 0x1EE37, Lo),
    (0x1EE39, 0x1EE39, Lo), (0x1EE3B, 0x1EE3B, Lo), (0x1EE42, 0x1EE42, Lo),
    (0x1EE47, 0x1EE47, Lo), (0x1EE49, 0x1EE49, Lo), (0x1EE4B, 0x1EE4B, Lo),
    (0x1EE4D, 0x1EE4F, Lo), (0x1EE51, 0x1EE52, Lo), (0x1EE54, 0x1EE54, Lo),
    (0x1EE57, 0x1EE57, Lo), (0x1EE59, 0x1EE59, Lo), (0x1EE5B, 0x1EE5B, Lo),
    (0x1EE5D, 0x1EE5D, Lo), (0x1EE5F, 0x1EE5F, Lo), (0x1EE61, 0x1EE62, Lo),
    (0x1EE64, 0x1EE64, Lo), (0x1EE67, 0x1EE6A, Lo), (0x1EE6C, 0x1EE72, Lo),
    (0x1EE74, 0x1EE77, Lo), (0x1EE79, 0x1EE7C, Lo), (0x1EE7E, 0x1EE7E, Lo),
    (0x1EE80, 0x1EE89, Lo), (0x1EE8B, 0x1EE9B, Lo), (0x1EEA1, 0x1EEA3, Lo),
    (0x1EEA5, 0x1EEA9, Lo), (0x1EEAB, 0x1EEBB, Lo), (0x1EEF0, 0x1EEF1, Sm),
    (0x1F000, 0x1F02B, So), (0x1F030, 0x1F093, So), (0x1F0A0, 0x1F0AE, So),
    (0x1F0B1, 0x1F0BF, So), (0x1F0C1, 0x1F0CF, So), (0x1F0D1, 0x1F0F5, So),
    (0x1F100, 0x1F10C, No), (0x1F10D, 0x1F1AD, So), (0x1F1E6, 0x1F202, So),
    (0x1F210, 0x1F23B, So), (0x1F240, 0x1F248, So), (0x1F250, 0x1F251, So),
    (0x1F260, 0x1F265, So), (0x1F300, 0x1F3FA, So), (0x1F3FB, 0x1F3FF, Sk),
    (0x1F400, 0x1F6D7, So), (0x1F6DD, 0x1F6EC, So), (0x1F6F0, 0x1F6FC, So),
    (0x1F700, 0x1F773, So), (0x1F780, 0x1F7D8, So), (0x1F7E0, 0x1F7EB, So),
    (0x1F7F0, 0x1F7F0, So), (0x1F800, 0x1F80B, So), (0x1F810, 0x1F847, So),
    (0x1F850, 0x1F859, So), (0x1F860, 0x1F887, So), (0x1F890, 0x1F8AD, So),
    (0x1F8B0, 0x1F8B1, So), (0x1F900, 0x1FA53, So), (0x1FA60, 0x1FA6D, So),
    (0x1FA70, 0x1FA74, So), (0x1FA78, 0x1FA7C, So), (0x1FA80, 0x1FA86, So),
    (0x1FA90, 0x1FAAC, So), (0x1FAB0, 0x1FABA, So), (0x1FAC0, 0x1FAC5, So),
    (0x1FAD0, 0x1FAD9, So), (0x1FAE0, 0x1FAE7, So), (0x1FAF0, 0x1FAF6, So),
    (0x1FB00, 0x1FB92, So), (0x1FB94, 0x1FBCA, So), (0x1FBF0, 0x1FBF9, Nd),
    (0x20000, 0x2A6DF, Lo), (0x2A700, 0x2B738, Lo), (0x2B740, 0x2B81D, Lo),
    (0x2B820, 0x2CEA1, Lo), (0x2CEB0, 0x2EBE0, Lo), (0x2F800, 0x2FA1D, Lo),
    (0x30000, 0x3134A, Lo), (0xE0001, 0xE0001, Cf), (0xE0020, 0xE007F, Cf),
    (0xE0100, 0xE01EF, Mn), (0xF0000, 0xFFFFD, Co), (0x100000, 0x10FFFD, Co),
];

/// Unicode Script property values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Script {
    Adlam,
    Ahom,
    AnatolianHieroglyphs,
    Arabic,
    Armenian,
    Avestan,
    Balinese,
    Bamum,
    BassaVah,
    Batak,
    Bengali,
    Bhaiksuki,
    Bopomofo,
    Brahmi,
    Braille,
    Buginese,
    Buhid,
    CanadianAboriginal,
    Carian,
    CaucasianAlbanian,
    Chakma,
    Cham,
    Cherokee,
    Chorasmian,
    Common,
    Coptic,
    Cuneiform,
    Cypriot,
    CyproMinoan,
    Cyrillic,
    Deseret,
    Devanagari,
    DivesAkuru,
    Dogra,
    Duployan,
    EgyptianHieroglyphs,
    Elbasan,
    Elymaic,
    Ethiopic,
    Georgian,
    Glagolitic,
    Gothic,
    Grantha,
    Greek,
    Gujarati,
    GunjalaGondi,
    Gurmukhi,
    Han,
    Hangul,
    HanifiRohingya,
    Hanunoo,
    Hatran,
    Hebrew,
    Hiragana,
    ImperialAramaic,
    Inherited,
    InscriptionalPahlavi,
    InscriptionalParthian,
    Javanese,
    Kaithi,
    Kannada,
    Katakana,
    KayahLi,
    Kharoshthi,
    KhitanSmallScript,
    Khmer,
    Khojki,
    Khudawadi,
    Lao,
    Latin,
    Lepcha,
    Limbu,
    LinearA,
    LinearB,
    Lisu,
    Lycian,
    Lydian,
    Mahajani,
    Makasar,
    Malayalam,
    Mandaic,
    Manichaean,
    Marchen,
    MasaramGondi,
    Medefaidrin,
    MeeteiMayek,
    MendeKikakui,
    MeroiticCursive,
    MeroiticHieroglyphs,
    Miao,
    Modi,
    Mongolian,
    Mro,
    Multani,
    Myanmar,
    Nabataean,
    Nandinagari,
    NewTaiLue,
    Newa,
    Nko,
    Nushu,
    NyiakengPuachueHmong,
    Ogham,
    OlChiki,
    OldHungarian,
    OldItalic,
    OldNorthArabian,
    OldPermic,
    OldPersian,
    OldSogdian,
    OldSouthArabian,
    OldTurkic,
    OldUyghur,
    Oriya,
    Osage,
    Osmanya,
    PahawhHmong,
    Palmyrene,
    PauCinHau,
    PhagsPa,
    Phoenician,
    PsalterPahlavi,
    Rejang,
    Runic,
    Samaritan,
    Saurashtra,
    Sharada,
    Shavian,
    Siddham,
    Signwriting,
    Sinhala,
    Sogdian,
    SoraSompeng,
    Soyombo,
    Sundanese,
    SylotiNagri,
    Syriac,
    Tagalog,
    Tagbanwa,
    TaiLe,
    TaiTham,
    TaiViet,
    Takri,
    Tamil,
    Tangsa,
    Tangut,
    Telugu,
    Thaana,
    Thai,
    Tibetan,
    Tifinagh,
    Tirhuta,
    Toto,
    Ugaritic,
    Vai,
    Vithkuqi,
    Wancho,
    WarangCiti,
    Yezidi,
    Yi,
    ZanabazarSquare,
    Unknown,
}

/// (long name, short alias, value) for every script.
pub(crate) static SCRIPT_NAMES: &[(&str, &str, Script)] = &[
    ("Adlam", "Adlm", Script::Adlam), ("Ahom", "Ahom", Script::Ahom),
    ("Anatolian_Hieroglyphs", "Hluw", Script::AnatolianHieroglyphs), ("Arabic", "Arab", Script::Arabic),
    ("Armenian", "Armn", Script::Armenian), ("Avestan", "Avst", Script::Avestan),
    ("Balinese", "Bali", Script::Balinese), ("Bamum", "Bamu", Script::Bamum),
    ("Bassa_Vah", "Bass", Script::BassaVah), ("Batak", "Batk", Script::Batak),
    ("Bengali", "Beng", Script::Bengali), ("Bhaiksuki", "Bhks", Script::Bhaiksuki),
    ("Bopomofo", "Bopo", Script::Bopomofo), ("Brahmi", "Brah", Script::Brahmi),
    ("Braille", "Brai", Script::Braille), ("Buginese", "Bugi", Script::Buginese),
    ("Buhid", "Buhd", Script::Buhid), ("Canadian_Aboriginal", "Cans", Script::CanadianAboriginal),
    ("Carian", "Cari", Script::Carian), ("Caucasian_Albanian", "Aghb", Script::CaucasianAlbanian),
    ("Chakma", "Cakm", Script::Chakma), ("Cham", "Cham", Script::Cham),
    ("Cherokee", "Cher", Script::Cherokee), ("Chorasmian", "Chrs", Script::Chorasmian),
    ("Common", "Zyyy", Script::Common), ("Coptic", "Copt", Script::Coptic),
    ("Cuneiform", "Xsux", Script::Cuneiform), ("Cypriot", "Cprt", Script::Cypriot),
    ("Cypro_Minoan", "Cpmn", Script::CyproMinoan), ("Cyrillic", "Cyrl", Script::Cyrillic),
    ("Deseret", "Dsrt", Script::Deseret), ("Devanagari", "Deva", Script::Devanagari),
    ("Dives_Akuru", "Diak", Script::DivesAkuru), ("Dogra", "Dogr", Script::Dogra),
    ("Duployan", "Dupl", Script::Duployan), ("Egyptian_Hieroglyphs", "Egyp", Script::EgyptianHieroglyphs),
    ("Elbasan", "Elba", Script::Elbasan), ("Elymaic", "Elym", Script::Elymaic),
    ("Ethiopic", "Ethi", Script::Ethiopic), ("Georgian", "Geor", Script::Georgian),
    ("Glagolitic", "Glag", Script::Glagolitic), ("Gothic", "Goth", Script::Gothic),
    ("Grantha", "Gran", Script::Grantha), ("Greek", "Grek", Script::Greek),
    ("Gujarati", "Gujr", Script::Gujarati), ("Gunjala_Gondi", "Gong", Script::GunjalaGondi),
    ("Gurmukhi", "Guru", Script::Gurmukhi), ("Han", "Hani", Script::Han),
    ("Hangul", "Hang", Script::Hangul), ("Hanifi_Rohingya", "Rohg", Script::HanifiRohingya),
    ("Hanunoo", "Hano", Script::Hanunoo), ("Hatran", "Hatr", Script::Hatran),
    ("Hebrew", "Hebr", Script::Hebrew), ("Hiragana", "Hira", Script::Hiragana),
    ("Imperial_Aramaic", "Armi", Script::ImperialAramaic), ("Inherited", "Zinh", Script::Inherited),
    ("Inscriptional_Pahlavi", "Phli", Script::InscriptionalPahlavi), ("Inscriptional_Parthian", "Prti", Script::InscriptionalParthian),
    ("Javanese", "Java", Script::Javanese), ("Kaithi", "Kthi", Script::Kaithi),
    ("Kannada", "Knda", Script::Kannada), ("Katakana", "Kana", Script::Katakana),
    ("Kayah_Li", "Kali", Script::KayahLi), ("Kharoshthi", "Khar", Script::Kharoshthi),
    ("Khitan_Small_Script", "Kits", Script::KhitanSmallScript), ("Khmer", "Khmr", Script::Khmer),
    ("Khojki", "Khoj", Script::Khojki), ("Khudawadi", "Sind", Script::Khudawadi),
    ("Lao", "Laoo", Script::Lao), ("Latin", "Latn", Script::Latin),
    ("Lepcha", "Lepc", Script::Lepcha), ("Limbu", "Limb", Script::Limbu),
    ("Linear_A", "Lina", Script::LinearA), ("Linear_B", "Linb", Script::LinearB),
    ("Lisu", "Lisu", Script::Lisu), ("Lycian", "Lyci", Script::Lycian),
    ("Lydian", "Lydi", Script::Lydian), ("Mahajani", "Mahj", Script::Mahajani),
    ("Makasar", "Maka", Script::Makasar), ("Malayalam", "Mlym", Script::Malayalam),
    ("Mandaic", "Mand", Script::Mandaic), ("Manichaean", "Mani", Script::Manichaean),
    ("Marchen", "Marc", Script::Marchen), ("Masaram_Gondi", "Gonm", Script::MasaramGondi),
    ("Medefaidrin", "Medf", Script::Medefaidrin), ("Meetei_Mayek", "Mtei", Script::MeeteiMayek),
    ("Mende_Kikakui", "Mend", Script::MendeKikakui), ("Meroitic_Cursive", "Merc", Script::MeroiticCursive),
    ("Meroitic_Hieroglyphs", "Mero", Script::MeroiticHieroglyphs), ("Miao", "Plrd", Script::Miao),
    ("Modi", "Modi", Script::Modi), ("Mongolian", "Mong", Script::Mongolian),
    ("Mro", "Mroo", Script::Mro), ("Multani", "Mult", Script::Multani),
    ("Myanmar", "Mymr", Script::Myanmar), ("Nabataean", "Nbat", Script::Nabataean),
    ("Nandinagari", "Nand", Script::Nandinagari), ("New_Tai_Lue", "Talu", Script::NewTaiLue),
    ("Newa", "Newa", Script::Newa), ("Nko", "Nkoo", Script::Nko),
    ("Nushu", "Nshu", Script::Nushu), ("Nyiakeng_Puachue_Hmong", "Hmnp", Script::NyiakengPuachueHmong),
    ("Ogham", "Ogam", Script::Ogham), ("Ol_Chiki", "Olck", Script::OlChiki),
    ("Old_Hungarian", "Hung", Script::OldHungarian), ("Old_Italic", "Ital", Script::OldItalic),
    ("Old_North_Arabian", "Narb", Script::OldNorthArabian), ("Old_Permic", "Perm", Script::OldPermic),
    ("Old_Persian", "Xpeo", Script::OldPersian), ("Old_Sogdian", "Sogo", Script::OldSogdian),
    ("Old_South_Arabian", "Sarb", Script::OldSouthArabian), ("Old_Turkic", "Orkh", Script::OldTurkic),
    ("Old_Uyghur", "Ougr", Script::OldUyghur), ("Oriya", "Orya", Script::Oriya),
    ("Osage", "Osge", Script::Osage), ("Osmanya", "Osma", Script::Osmanya),
    ("Pahawh_Hmong", "Hmng", Script::PahawhHmong), ("Palmyrene", "Palm", Script::Palmyrene),
    ("Pau_Cin_Hau", "Pauc", Script::PauCinHau), ("Phags_Pa", "Phag", Script::PhagsPa),
    ("Phoenician", "Phnx", Script::Phoenician), ("Psalter_Pahlavi", "Phlp", Script::PsalterPahlavi),
    ("Rejang", "Rjng", Script::Rejang), ("Runic", "Runr", Script::Runic),
    ("Samaritan", "Samr", Script::Samaritan), ("Saurashtra", "Saur", Script::Saurashtra),
    ("Sharada", "Shrd", Script::Sharada), ("Shavian", "Shaw", Script::Shavian),
    ("Siddham", "Sidd", Script::Siddham), ("SignWriting", "Sgnw", Script::Signwriting),
    ("Sinhala", "Sinh", Script::Sinhala), ("Sogdian", "Sogd", Script::Sogdian),
    ("Sora_Sompeng", "Sora", Script::SoraSompeng), ("Soyombo", "Soyo", Script::Soyombo),
    ("Sundanese", "Sund", Script::Sundanese), ("Syloti_Nagri", "Sylo", Script::SylotiNagri),
    ("Syriac", "Syrc", Script::Syriac), ("Tagalog", "Tglg", Script::Tagalog),
    ("Tagbanwa", "Tagb", Script::Tagbanwa), ("Tai_Le", "Tale", Script::TaiLe),
    ("Tai_Tham", "Lana", Script::TaiTham), ("Tai_Viet", "Tavt", Script::TaiViet),
    ("Takri", "Takr", Script::Takri), ("Tamil", "Taml", Script::Tamil),
    ("Tangsa", "Tnsa", Script::Tangsa), ("Tangut", "Tang", Script::Tangut),
    ("Telugu", "Telu", Script::Telugu), ("Thaana", "Thaa", Script::Thaana),
    ("Thai", "Thai", Script::Thai), ("Tibetan", "Tibt", Script::Tibetan),
    ("Tifinagh", "Tfng", Script::Tifinagh), ("Tirhuta", "Tirh", Script::Tirhuta),
    ("Toto", "Toto", Script::Toto), ("Ugaritic", "Ugar", Script::Ugaritic),
    ("Vai", "Vaii", Script::Vai), ("Vithkuqi", "Vith", Script::Vithkuqi),
    ("Wancho", "Wcho", Script::Wancho), ("Warang_Citi", "Wara", Script::WarangCiti),
    ("Yezidi", "Yezi", Script::Yezidi), ("Yi", "Yiii", Script::Yi),
    ("Zanabazar_Square", "Zanb", Script::ZanabazarSquare), ("Unknown", "Zzzz", Script::Unknown),
];

pub(crate) static SCRIPT_TABLE: &[(u32, u32, Script)] = &[
    (0x0000, 0x0040, Script::Common), (0x0041, 0x005A, Script::Latin),
    (0x005B, 0x0060, Script::Common), (0x0061, 0x007A, Script::Latin),
    (0x007B, 0x00A9, Script::Common), (0x00AA, 0x00AA, Script::Latin),
    (0x00AB, 0x00B9, Script::Common), (0x00BA, 0x00BA, Script::Latin),
    (0x00BB, 0x00BF, Script::Common), (0x00C0, 0x00D6, Script::Latin),
    (0x00D7, 0x00D7, Script::Common), (0x00D8, 0x00F6, Script::Latin),
    (0x00F7, 0x00F7, Script::Common), (0x00F8, 0x02B8, Script::Latin),
    (0x02B9, 0x02DF, Script::Common), (0x02E0, 0x02E4, Script::Latin),
    (0x02E5, 0x02E9, Script::Common), (0x02EA, 0x02EB, Script::Bopomofo),
    (0x02EC, 0x02FF, Script::Common), (0x0300, 0x036F, Script::Inherited),
    (0x0370, 0x0373, Script::Greek), (0x0374, 0x0374, Script::Common),
    (0x0375, 0x0377, Script::Greek), (0x037A, 0x037D, Script::Greek),
    (0x037E, 0x037E, Script::Common), (0x037F, 0x037F, Script::Greek),
    (0x0384, 0x0384, Script::Greek), (0x0385, 0x0385, Script::Common),
    (0x0386, 0x0386, Script::Greek), (0x0387, 0x0387, Script::Common),
    (0x0388, 0x038A, Script::Greek), (0x038C, 0x038C, Script::Greek),
    (0x038E, 0x03A1, Script::Greek), (0x03A3, 0x03E1, Script::Greek),
    (0x03E2, 0x03EF, Script::Coptic), (0x03F0, 0x03FF, Script::Greek),
    (0x0400, 0x0484, Script::Cyrillic), (0x0485, 0x0486, Script::Inherited),
    (0x0487, 0x052F, Script::Cyrillic), (0x0531, 0x0556, Script::Armenian),
    (0x0559, 0x058A, Script::Armenian), (0x058D, 0x058F, Script::Armenian),
    (0x0591, 0x05C7, Script::Hebrew), (0x05D0, 0x05EA, Script::Hebrew),
    (0x05EF, 0x05F4, Script::Hebrew), (0x0600, 0x0604, Script::Arabic),
    (0x0605, 0x0605, Script::Common), (0x0606, 0x060B, Script::Arabic),
    (0x060C, 0x060C, Script::Common), (0x060D, 0x061A, Script::Arabic),
    (0x061B, 0x061B, Script::Common), (0x061C, 0x061E, Script::Arabic),
    (0x061F, 0x061F, Script::Common), (0x0620, 0x063F, Script::Arabic),
    (0x0640, 0x0640, Script::Common), (0x0641, 0x064A, Script::Arabic),
    (0x064B, 0x0655, Script::Inherited), (0x0656, 0x066F, Script::Arabic),
    (0x0670, 0x0670, Script::Inherited), (0x0671, 0x06DC, Script::Arabic),
    (0x06DD, 0x06DD, Script::Common), (0x06DE, 0x06FF, Script::Arabic),
    (0x0700, 0x070D, Script::Syriac), (0x070F, 0x074A, Script::Syriac),
    (0x074D, 0x074F, Script::Syriac), (0x0750, 0x077F, Script::Arabic),
    (0x0780, 0x07B1, Script::Thaana), (0x07C0, 0x07FA, Script::Nko),
    (0x07FD, 0x07FF, Script::Nko), (0x0800, 0x082D, Script::Samaritan),
    (0x0830, 0x083E, Script::Samaritan), (0x0840, 0x085B, Script::Mandaic),
    (0x085E, 0x085E, Script::Mandaic), (0x0860, 0x086A, Script::Syriac),
    (0x0870, 0x088E, Script::Arabic), (0x0890, 0x0891, Script::Arabic),
    (0x0898, 0x08E1, Script::Arabic), (0x08E2, 0x08E2, Script::Common),
    (0x08E3, 0x08FF, Script::Arabic), (0x0900, 0x0950, Script::Devanagari),
    (0x0951, 0x0954, Script::Inherited), (0x0955, 0x0963, Script::Devanagari),
    (0x0964, 0x0965, Script::Common), (0x0966, 0x097F, Script::Devanagari),
    (0x0980, 0x0983, Script::Bengali), (0x0985, 0x098C, Script::Bengali),
    (0x098F, 0x0990, Script::Bengali), (0x0993, 0x09A8, Script::Bengali),
    (0x09AA, 0x09B0, Script::Bengali), (0x09B2, 0x09B2, Script::Bengali),
    (0x09B6, 0x09B9, Script::Bengali), (0x09BC, 0x09C4, Script::Bengali),
    (0x09C7, 0x09C8, Script::Bengali), (0x09CB, 0x09CE, Script::Bengali),
    (0x09D7, 0x09D7, Script::Bengali), (0x09DC, 0x09DD, Script::Bengali),
    (0x09DF, 0x09E3, Script::Bengali), (0x09E6, 0x09FE, Script::Bengali),
    (0x0A01, 0x0A03, Script::Gurmukhi), (0x0A05, 0x0A0A, Script::Gurmukhi),
    (0x0A0F, 0x0A10, Script::Gurmukhi), (0x0A13, 0x0A28, Script::Gurmukhi),
    (0x0A2A, 0x0A30, Script::Gurmukhi), (0x0A32, 0x0A33, Script::Gurmukhi),
    (0x0A35, 0x0A36, Script::Gurmukhi), (0x0A38, 0x0A39, Script::Gurmukhi),
    (0x0A3C, 0x0A3C, Script::Gurmukhi), (0x0A3E, 0x0A42, Script::Gurmukhi),
    (0x0A47, 0x0A48, Script::Gurmukhi), (0x0A4B, 0x0A4D, Script::Gurmukhi),
    (0x0A51, 0x0A51, Script::Gurmukhi), (0x0A59, 0x0A5C, Script::Gurmukhi),
    (0x0A5E, 0x0A5E, Script::Gurmukhi), (0x0A66, 0x0A76, Script::Gurmukhi),
    (0x0A81, 0x0A83, Script::Gujarati), (0x0A85, 0x0A8D, Script::Gujarati),
    (0x0A8F, 0x0A91, Script::Gujarati), (0x0A93, 0x0AA8, Script::Gujarati),
    (0x0AAA, 0x0AB0, Script::Gujarati), (0x0AB2, 0x0AB3, Script::Gujarati),
    (0x0AB5, 0x0AB9, Script::Gujarati), (0x0ABC, 0x0AC5, Script::Gujarati),
    (0x0AC7, 0x0AC9, Script::Gujarati), (0x0ACB, 0x0ACD, Script::Gujarati),
    (0x0AD0, 0x0AD0, Script::Gujarati), (0x0AE0, 0x0AE3, Script::Gujarati),
    (0x0AE6, 0x0AF1, Script::Gujarati), (0x0AF9, 0x0AFF, Script::Gujarati),
    (0x0B01, 0x0B03, Script::Oriya), (0x0B05, 0x0B0C, Script::Oriya),
    (0x0B0F, 0x0B10, Script::Oriya), (0x0B13, 0x0B28, Script::Oriya),
    (0x0B2A, 0x0B30, Script::Oriya), (0x0B32, 0x0B33, Script::Oriya),
    (0x0B35, 0x0B39, Script::Oriya), (0x0B3C, 0x0B44, Script::Oriya),
    (0x0B47, 0x0B48, Script::Oriya), (0x0B4B, 0x0B4D, Script::Oriya),
    (0x0B55, 0x0B57, Script::Oriya), (0x0B5C, 0x0B5D, Script::Oriya),
    (0x0B5F, 0x0B63, Script::Oriya), (0x0B66, 0x0B77, Script::Oriya),
    (0x0B82, 0x0B83, Script::Tamil), (0x0B85, 0x0B8A, Script::Tamil),
    (0x0B8E, 0x0B90, Script::Tamil), (0x0B92, 0x0B95, Script::Tamil),
    (0x0B99, 0x0B9A, Script::Tamil), (0x0B9C, 0x0B9C, Script::Tamil),
    (0x0B9E, 0x0B9F, Script::Tamil), (0x0BA3, 0x0BA4, Script::Tamil),
    (0x0BA8, 0x0BAA, Script::Tamil), (0x0BAE, 0x0BB9, Script::Tamil),
    (0x0BBE, 0x0BC2, Script::Tamil), (0x0BC6, 0x0BC8, Script::Tamil),
    (0x0BCA, 0x0BCD, Script::Tamil), (0x0BD0, 0x0BD0, Script::Tamil),
    (0x0BD7, 0x0BD7, Script::Tamil), (0x0BE6, 0x0BFA, Script::Tamil),
    (0x0C00, 0x0C0C, Script::Telugu), (0x0C0E, 0x0C10, Script::Telugu),
    (0x0C12, 0x0C28, Script::Telugu), (0x0C2A, 0x0C39, Script::Telugu),
    (0x0C3C, 0x0C44, Script::Telugu), (0x0C46, 0x0C48, Script::Telugu),
    (0x0C4A, 0x0C4D, Script::Telugu), (0x0C55, 0x0C56, Script::Telugu),
    (0x0C58, 0x0C5A, Script::Telugu), (0x0C5D, 0x0C5D, Script::Telugu),
    (0x0C60, 0x0C63, Script::Telugu), (0x0C66, 0x0C6F, Script::Telugu),
    (0x0C77, 0x0C7F, Script::Telugu), (0x0C80, 0x0C8C, Script::Kannada),
    (0x0C8E, 0x0C90, Script::Kannada), (0x0C92, 0x0CA8, Script::Kannada),
    (0x0CAA, 0x0CB3, Script::Kannada), (0x0CB5, 0x0CB9, Script::Kannada),
    (0x0CBC, 0x0CC4, Script::Kannada), (0x0CC6, 0x0CC8, Script::Kannada),
    (0x0CCA, 0x0CCD, Script::Kannada), (0x0CD5, 0x0CD6, Script::Kannada),
    (0x0CDD, 0x0CDE, Script::Kannada), (0x0CE0, 0x0CE3, Script::Kannada),
    (0x0CE6, 0x0CEF, Script::Kannada), (0x0CF1, 0x0CF2, Script::Kannada),
    (0x0D00, 0x0D0C, Script::Malayalam), (0x0D0E, 0x0D10, Script::Malayalam),
    (0x0D12, 0x0D44, Script::Malayalam), (0x0D46, 0x0D48, Script::Malayalam),
    (0x0D4A, 0x0D4F, Script::Malayalam), (0x0D54, 0x0D63, Script::Malayalam),
    (0x0D66, 0x0D7F, Script::Malayalam), (0x0D81, 0x0D83, Script::Sinhala),
    (0x0D85, 0x0D96, Script::Sinhala), (0x0D9A, 0x0DB1, Script::Sinhala),
    (0x0DB3, 0x0DBB, Script::Sinhala), (0x0DBD, 0x0DBD, Script::Sinhala),
    (0x0DC0, 0x0DC6, Script::Sinhala), (0x0DCA, 0x0DCA, Script::Sinhala),
    (0x0DCF, 0x0DD4, Script::Sinhala), (0x0DD6, 0x0DD6, Script::Sinhala),
    (0x0DD8, 0x0DDF, Script::Sinhala), (0x0DE6, 0x0DEF, Script::Sinhala),
    (0x0DF2, 0x0DF4, Script::Sinhala), (0x0E01, 0x0E3A, Script::Thai),
    (0x0E3F, 0x0E3F, Script::Common), (0x0E40, 0x0E5B, Script::Thai),
    (0x0E81, 0x0E82, Script::Lao), (0x0E84, 0x0E84, Script::Lao),
    (0x0E86, 0x0E8A, Script::Lao), (0x0E8C, 0x0EA3, Script::Lao),
    (0x0EA5, 0x0EA5, Script::Lao), (0x0EA7, 0x0EBD, Script::Lao),
    (0x0EC0, 0x0EC4, Script::Lao), (0x0EC6, 0x0EC6, Script::Lao),
    (0x0EC8, 0x0ECD, Script::Lao), (0x0ED0, 0x0ED9, Script::Lao),
    (0x0EDC, 0x0EDF, Script::Lao), (0x0F00, 0x0F47, Script::Tibetan),
    (0x0F49, 0x0F6C, Script::Tibetan), (0x0F71, 0x0F97, Script::Tibetan),
    (0x0F99, 0x0FBC, Script::Tibetan), (0x0FBE, 0x0FCC, Script::Tibetan),
    (0x0FCE, 0x0FD4, Script::Tibetan), (0x0FD5, 0x0FD8, Script::Common),
    (0x0FD9, 0x0FDA, Script::Tibetan), (0x1000, 0x109F, Script::Myanmar),
    (0x10A0, 0x10C5, Script::Georgian), (0x10C7, 0x10C7, Script::Georgian),
    (0x10CD, 0x10CD, Script::Georgian), (0x10D0, 0x10FA, Script::Georgian),
    (0x10FB, 0x10FB, Script::Common), (0x10FC, 0x10FF, Script::Georgian),
    (0x1100, 0x11FF, Script::Hangul), (0x1200, 0x1248, Script::Ethiopic),
    (0x124A, 0x124D, Script::Ethiopic), (0x1250, 0x1256, Script::Ethiopic),
    (0x1258, 0x1258, Script::Ethiopic), (0x125A, 0x125D, Script::Ethiopic),
    (0x1260, 0x1288, Script::Ethiopic), (0x128A, 0x128D, Script::Ethiopic),
    (0x1290, 0x12B0, Script::Ethiopic), (0x12B2, 0x12B5, Script::Ethiopic),
    (0x12B8, 0x12BE, Script::Ethiopic), (0x12C0, 0x12C0, Script::Ethiopic),
    (0x12C2, 0x12C5, Script::Ethiopic), (0x12C8, 0x12D6, Script::Ethiopic),
    (0x12D8, 0x1310, Script::Ethiopic), (0x1312, 0x1315, Script::Ethiopic),
    (0x1318, 0x135A, Script::Ethiopic), (0x135D, 0x137C, Script::Ethiopic),
    (0x1380, 0x1399, Script::Ethiopic), (0x13A0, 0x13F5, Script::Cherokee),
    (0x13F8, 0x13FD, Script::Cherokee), (0x1400, 0x167F, Script::CanadianAboriginal),
    (0x1680, 0x169C, Script::Ogham), (0x16A0, 0x16EA, Script::Runic),
    (0x16EB, 0x16ED, Script::Common), (0x16EE, 0x16F8, Script::Runic),
    (0x1700, 0x1715, Script::Tagalog), (0x171F, 0x171F, Script::Tagalog),
    (0x1720, 0x1734, Script::Hanunoo), (0x1735, 0x1736, Script::Common),
    (0x1740, 0x1753, Script::Buhid), (0x1760, 0x176C, Script::Tagbanwa),
    (0x176E, 0x1770, Script::Tagbanwa), (0x1772, 0x1773, Script::Tagbanwa),
    (0x1780, 0x17DD, Script::Khmer), (0x17E0, 0x17E9, Script::Khmer),
    (0x17F0, 0x17F9, Script::Khmer), (0x1800, 0x1801, Script::Mongolian),
    (0x1802, 0x1803, Script::Common), (0x1804, 0x1804, Script::Mongolian),
    (0x1805, 0x1805, Script::Common), (0x1806, 0x1819, Script::Mongolian),
    (0x1820, 0x1878, Script::Mongolian), (0x1880, 0x18AA, Script::Mongolian),
    (0x18B0, 0x18F5, Script::CanadianAboriginal), (0x1900, 0x191E, Script::Limbu),
    (0x1920, 0x192B, Script::Limbu), (0x1930, 0x193B, Script::Limbu),
    (0x1940, 0x1940, Script::Limbu), (0x1944, 0x194F, Script::Limbu),
    (0x1950, 0x196D, Script::TaiLe), (0x1970, 0x1974, Script::TaiLe),
    (0x1980, 0x19AB, Script::NewTaiLue), (0x19B0, 0x19C9, Script::NewTaiLue),
    (0x19D0, 0x19DA, Script::NewTaiLue), (0x19DE, 0x19DF, Script::NewTaiLue),
    (0x19E0, 0x19FF, Script::Khmer), (0x1A00, 0x1A1B, Script::Buginese),
    (0x1A1E, 0x1A1F, Script::Buginese), (0x1A20, 0x1A5E, Script::TaiTham),
    (0x1A60, 0x1A7C, Script::TaiTham), (0x1A7F, 0x1A89, Script::TaiTham),
    (0x1A90, 0x1A99, Script::TaiTham), (0x1AA0, 0x1AAD, Script::TaiTham),
    (0x1AB0, 0x1ACE, Script::Inherited), (0x1B00, 0x1B4C, Script::Balinese),
    (0x1B50, 0x1B7E, Script::Balinese), (0x1B80, 0x1BBF, Script::Sundanese),
    (0x1BC0, 0x1BF3, Script::Batak), (0x1BFC, 0x1BFF, Script::Batak),
    (0x1C00, 0x1C37, Script::Lepcha), (0x1C3B, 0x1C49, Script::Lepcha),
    (0x1C4D, 0x1C4F, Script::Lepcha), (0x1C50, 0x1C7F, Script::OlChiki),
    (0x1C80, 0x1C88, Script::Cyrillic), (0x1C90, 0x1CBA, Script::Georgian),
    (0x1CBD, 0x1CBF, Script::Georgian), (0x1CC0, 0x1CC7, Script::Sundanese),
    (0x1CD0, 0x1CD2, Script::Inherited), (0x1CD3, 0x1CD3, Script::Common),
    (0x1CD4, 0x1CE0, Script::Inherited), (0x1CE1, 0x1CE1, Script::Common),
    (0x1CE2, 0x1CE8, Script::Inherited), (0x1CE9, 0x1CEC, Script::Common),
    (0x1CED, 0x1CED, Script::Inherited), (0x1CEE, 0x1CF3, Script::Common),
    (0x1CF4, 0x1CF4, Script::Inherited), (0x1CF5, 0x1CF7, Script::Common),
    (0x1CF8, 0x1CF9, Script::Inherited), (0x1CFA, 0x1CFA, Script::Common),
    (0x1D00, 0x1D25, Script::Latin), (0x1D26, 0x1D2A, Script::Greek),
    (0x1D2B, 0x1D2B, Script::Cyrillic), (0x1D2C, 0x1D5C, Script::Latin),
    (0x1D5D, 0x1D61, Script::Greek), (0x1D62, 0x1D65, Script::Latin),
    (0x1D66, 0x1D6A, Script::Greek), (0x1D6B, 0x1D77, Script::Latin),
    (0x1D78, 0x1D78, Script::Cyrillic), (0x1D79, 0x1DBE, Script::Latin),
    (0x1DBF, 0x1DBF, Script::Greek), (0x1DC0, 0x1DFF, Script::Inherited),
    (0x1E00, 0x1EFF, Script::Latin), (0x1F00, 0x1F15, Script::Greek),
    (0x1F18, 0x1F1D, Script::Greek), (0x1F20, 0x1F45, Script::Greek),
    (0x1F48, 0x1F4D, Script::Greek), (0x1F50, 0x1F57, Script::Greek),
    (0x1F59, 0x1F59, Script::Greek), (0x1F5B, 0x1F5B, Script::Greek),
    (0x1F5D, 0x1F5D, Script::Greek), (0x1F5F, 0x1F7D, Script::Greek),
    (0x1F80, 0x1FB4, Script::Greek), (0x1FB6, 0x1FC4, Script::Greek),
    (0x1FC6, 0x1FD3, Script::Greek), (0x1FD6, 0x1FDB, Script::Greek),
    (0x1FDD, 0x1FEF, Script::Greek), (0x1FF2, 0x1FF4, Script::Greek),
    (0x1FF6, 0x1FFE, Script::Greek), (0x2000, 0x200B, Script::Common),
    (0x200C, 0x200D, Script::Inherited), (0x200E, 0x2064, Script::Common),
    (0x2066, 0x2070, Script::Common), (0x2071, 0x2071, Script::Latin),
    (0x2074, 0x207E, Script::Common), (0x207F, 0x207F, Script::Latin),
    (0x2080, 0x208E, Script::Common), (0x2090, 0x209C, Script::Latin),
    (0x20A0, 0x20C0, Script::Common), (0x20D0, 0x20F0, Script::Inherited),
    (0x2100, 0x2125, Script::Common), (0x2126, 0x2126, Script::Greek),
    (0x2127, 0x2129, Script::Common), (0x212A, 0x212B, Script::Latin),
    (0x212C, 0x2131, Script::Common), (0x2132, 0x2132, Script::Latin),
    (0x2133, 0x214D, Script::Common), (0x214E, 0x214E, Script::Latin),
    (0x214F, 0x215F, Script::Common), (0x2160, 0x2188, Script::Latin),
    (0x2189, 0x218B, Script::Common), (0x2190, 0x2426, Script::Common),
    (0x2440, 0x244A, Script::Common), (0x2460, 0x27FF, Script::Common),
    (0x2800, 0x28FF, Script::Braille), (0x2900, 0x2B73, Script::Common),
    (0x2B76, 0x2B95, Script::Common), (0x2B97, 0x2BFF, Script::Common),
    (0x2C00, 0x2C5F, Script::Glagolitic), (0x2C60, 0x2C7F, Script::Latin),
    (0x2C80, 0x2CF3, Script::Coptic), (0x2CF9, 0x2CFF, Script::Coptic),
    (0x2D00, 0x2D25, Script::Georgian), (0x2D27, 0x2D27, Script::Georgian),
    (0x2D2D, 0x2D2D, Script::Georgian), (0x2D30, 0x2D67, Script::Tifinagh),
    (0x2D6F, 0x2D70, Script::Tifinagh), (0x2D7F, 0x2D7F, Script::Tifinagh),
    (0x2D80, 0x2D96, Script::Ethiopic), (0x2DA0, 0x2DA6, Script::Ethiopic),
    (0x2DA8, 0x2DAE, Script::Ethiopic), (0x2DB0, 0x2DB6, Script::Ethiopic),
    (0x2DB8, 0x2DBE, Script::Ethiopic), (0x2DC0, 0x2DC6, Script::Ethiopic),
    (0x2DC8, 0x2DCE, Script::Ethiopic), (0x2DD0, 0x2DD6, Script::Ethiopic),
    (0x2DD8, 0x2DDE, Script::Ethiopic), (0x2DE0, 0x2DFF, Script::Cyrillic),
    (0x2E00, 0x2E5D, Script::Common), (0x2E80, 0x2E99, Script::Han),
    (0x2E9B, 0x2EF3, Script::Han), (0x2F00, 0x2FD5, Script::Han),
    (0x2FF0, 0x2FFB, Script::Common), (0x3000, 0x3004, Script::Common),
    (0x3005, 0x3005, Script::Han), (0x3006, 0x3006, Script::Common),
    (0x3007, 0x3007, Script::Han), (0x3008, 0x3020, Script::Common),
    (0x3021, 0x3029, Script::Han), (0x302A, 0x302D, Script::Inherited),
    (0x302E, 0x302F, Script::Hangul), (0x3030, 0x3037, Script::Common),
    (0x3038, 0x303B, Script::Han), (0x303C, 0x303F, Script::Common),
    (0x3041, 0x3096, Script::Hiragana), (0x3099, 0x309A, Script::Inherited),
    (0x309B, 0x309C, Script::Common), (0x309D, 0x309F, Script::Hiragana),
    (0x30A0, 0x30A0, Script::Common), (0x30A1, 0x30FA, Script::Katakana),
    (0x30FB, 0x30FC, Script::Common), (0x30FD, 0x30FF, Script::Katakana),
    (0x3105, 0x312F, Script::Bopomofo), (0x3131, 0x318E, Script::Hangul),
    (0x3190, 0x319F, Script::Common), (0x31A0, 0x31BF, Script::Bopomofo),
    (0x31C0, 0x31E3, Script::Common), (0x31F0, 0x31FF, Script::Katakana),
    (0x3200, 0x321E, Script::Hangul), (0x3220, 0x325F, Script::Common),
    (0x3260, 0x327E, Script::Hangul), (0x327F, 0x32CF, Script::Common),
    (0x32D0, 0x32FE, Script::Katakana), (0x32FF, 0x32FF, Script::Common),
    (0x3300, 0x3357, Script::Katakana), (0x3358, 0x33FF, Script::Common),
    (0x3400, 0x4DBF, Script::Han), (0x4DC0, 0x4DFF, Script::Common),
    (0x4E00, 0x9FFF, Script::Han), (0xA000, 0xA48C, Script::Yi),
    (0xA490, 0xA4C6, Script::Yi), (0xA4D0, 0xA4FF, Script::Lisu),
    (0xA500, 0xA62B, Script::Vai), (0xA640, 0xA69F, Script::Cyrillic),
    (0xA6A0, 0xA6F7, Script::Bamum), (0xA700, 0xA721, Script::Common),
    (0xA722, 0xA787, Script::Latin), (0xA788, 0xA78A, Script::Common),
    (0xA78B, 0xA7CA, Script::Latin), (0xA7D0, 0xA7D1, Script::Latin),
    (0xA7D3, 0xA7D3, Script::Latin), (0xA7D5, 0xA7D9, Script::Latin),
    (0xA7F2, 0xA7FF, Script::Latin), (0xA800, 0xA82C, Script::SylotiNagri),
    (0xA830, 0xA839, Script::Common), (0xA840, 0xA877, Script::PhagsPa),
    (0xA880, 0xA8C5, Script::Saurashtra), (0xA8CE, 0xA8D9, Script::Saurashtra),
    (0xA8E0, 0xA8FF, Script::Devanagari), (0xA900, 0xA92D, Script::KayahLi),
    (0xA92E, 0xA92E, Script::Common), (0xA92F, 0xA92F, Script::KayahLi),
    (0xA930, 0xA953, Script::Rejang), (0xA95F, 0xA95F, Script::Rejang),
    (0xA960, 0xA97C, Script::Hangul), (0xA980, 0xA9CD, Script::Javanese),
    (0xA9CF, 0xA9CF, Script::Common), (0xA9D0, 0xA9D9, Script::Javanese),
    (0xA9DE, 0xA9DF, Script::Javanese), (0xA9E0, 0xA9FE, Script::Myanmar),
    (0xAA00, 0xAA36, Script::Cham), (0xAA40, 0xAA4D, Script::Cham),
    (0xAA50, 0xAA59, Script::Cham), (0xAA5C, 0xAA5F, Script::Cham),
    (0xAA60, 0xAA7F, Script::Myanmar), (0xAA80, 0xAAC2, Script::TaiViet),
    (0xAADB, 0xAADF, Script::TaiViet), (0xAAE0, 0xAAF6, Script::MeeteiMayek),
    (0xAB01, 0xAB06, Script::Ethiopic), (0xAB09, 0xAB0E, Script::Ethiopic),
    (0xAB11, 0xAB16, Script::Ethiopic), (0xAB20, 0xAB26, Script::Ethiopic),
    (0xAB28, 0xAB2E, Script::Ethiopic), (0xAB30, 0xAB5A, Script::Latin),
    (0xAB5B, 0xAB5B, Script::Common), (0xAB5C, 0xAB64, Script::Latin),
    (0xAB65, 0xAB65, Script::Greek), (0xAB66, 0xAB69, Script::Latin),
    (0xAB6A, 0xAB6B, Script::Common), (0xAB70, 0xABBF, Script::Cherokee),
    (0xABC0, 0xABED, Script::MeeteiMayek), (0xABF0, 0xABF9, Script::MeeteiMayek),
    (0xAC00, 0xD7A3, Script::Hangul), (0xD7B0, 0xD7C6, Script::Hangul),
    (0xD7CB, 0xD7FB, Script::Hangul), (0xF900, 0xFA6D, Script::Han),
    (0xFA70, 0xFAD9, Script::Han), (0xFB00, 0xFB06, Script::Latin),
    (0xFB13, 0xFB17, Script::Armenian), (0xFB1D, 0xFB36, Script::Hebrew),
    (0xFB38, 0xFB3C, Script::Hebrew), (0xFB3E, 0xFB3E, Script::Hebrew),
    (0xFB40, 0xFB41, Script::Hebrew), (0xFB43, 0xFB44, Script::Hebrew),
    (0xFB46, 0xFB4F, Script::Hebrew), (0xFB50, 0xFBC2, Script::Arabic),
    (0xFBD3, 0xFD3D, Script::Arabic), (0xFD3E, 0xFD3F, Script::Common),
    (0xFD40, 0xFD8F, Script::Arabic), (0xFD92, 0xFDC7, Script::Arabic),
    (0xFDCF, 0xFDCF, Script::Arabic), (0xFDF0, 0xFDFF, Script::Arabic),
    (0xFE00, 0xFE0F, Script::Inherited), (0xFE10, 0xFE19, Script::Common),
    (0xFE20, 0xFE2D, Script::Inherited), (0xFE2E, 0xFE2F, Script::Cyrillic),
    (0xFE30, 0xFE52, Script::Common), (0xFE54, 0xFE66, Script::Common),
    (0xFE68, 0xFE6B, Script::Common), (0xFE70, 0xFE74, Script::Arabic),
    (0xFE76, 0xFEFC, Script::Arabic), (0xFEFF, 0xFEFF, Script::Common),
    (0xFF01, 0xFF20, Script::Common), (0xFF21, 0xFF3A, Script::Latin),
    (0xFF3B, 0xFF40, Script::Common), (0xFF41, 0xFF5A, Script::Latin),
    (0xFF5B, 0xFF65, Script::Common), (0xFF66, 0xFF6F, Script::Katakana),
    (0xFF70, 0xFF70, Script::Common), (0xFF71, 0xFF9D, Script::Katakana),
    (0xFF9E, 0xFF9F, Script::Common), (0xFFA0, 0xFFBE, Script::Hangul),
    (0xFFC2, 0xFFC7, Script::Hangul), (0xFFCA, 0xFFCF, Script::Hangul),
    (0xFFD2, 0xFFD7, Script::Hangul), (0xFFDA, 0xFFDC, Script::Hangul),
    (0xFFE0, 0xFFE6, Script::Common), (0xFFE8, 0xFFEE, Script::Common),
    (0xFFF9, 0xFFFD, Script::Common), (0x10000, 0x1000B, Script::LinearB),
    (0x1000D, 0x10026, Script::LinearB), (0x10028, 0x1003A, Script::LinearB),
    (0x1003C, 0x1003D, Script::LinearB), (0x1003F, 0x1004D, Script::LinearB),
    (0x10050, 0x1005D, Script::LinearB), (0x10080, 0x100FA, Script::LinearB),
    (0x10100, 0x10102, Script::Common), (0x10107, 0x10133, Script::Common),
    (0x10137, 0x1013F, Script::Common), (0x10140, 0x1018E, Script::Greek),
    (0x10190, 0x1019C, Script::Common), (0x101A0, 0x101A0, Script::Greek),
    (0x101D0, 0x101FC, Script::Common), (0x101FD, 0x101FD, Script::Inherited),
    (0x10280, 0x1029C, Script::Lycian), (0x102A0, 0x102D0, Script::Carian),
    (0x102E0, 0x102E0, Script::Inherited), (0x102E1, 0x102FB, Script::Common),
    (0x10300, 0x10323, Script::OldItalic), (0x1032D, 0x1032F, Script::OldItalic),
    (0x10330, 0x1034A, Script::Gothic), (0x10350, 0x1037A, Script::OldPermic),
    (0x10380, 0x1039D, Script::Ugaritic), (0x1039F, 0x1039F, Script::Ugaritic),
    (0x103A0, 0x103C3, Script::OldPersian), (0x103C8, 0x103D5, Script::OldPersian),
    (0x10400, 0x1044F, Script::Deseret), (0x10450, 0x1047F, Script::Shavian),
    (0x10480, 0x1049D, Script::Osmanya), (0x104A0, 0x104A9, Script::Osmanya),
    (0x104B0, 0x104D3, Script::Osage), (0x104D8, 0x104FB, Script::Osage),
    (0x10500, 0x10527, Script::Elbasan), (0x10530, 0x10563, Script::CaucasianAlbanian),
    (0x1056F, 0x1056F, Script::CaucasianAlbanian), (0x10570, 0x1057A, Script::Vithkuqi),
    (0x1057C, 0x1058A, Script::Vithkuqi), (0x1058C, 0x10592, Script::Vithkuqi),
    (0x10594, 0x10595, Script::Vithkuqi), (0x10597, 0x105A1, Script::Vithkuqi),
    (0x105A3, 0x105B1, Script::Vithkuqi), (0x105B3, 0x105B9, Script::Vithkuqi),
    (0x105BB, 0x105BC, Script::Vithkuqi), (0x10600, 0x10736, Script::LinearA),
    (0x10740, 0x10755, Script::LinearA), (0x10760, 0x10767, Script::LinearA),
    (0x10780, 0x10785, Script::Latin), (0x10787, 0x107B0, Script::Latin),
    (0x107B2, 0x107BA, Script::Latin), (0x10800, 0x10805, Script::Cypriot),
    (0x10808, 0x10808, Script::Cypriot), (0x1080A, 0x10835, Script::Cypriot),
    (0x10837, 0x10838, Script::Cypriot), (0x1083C, 0x1083C, Script::Cypriot),
    (0x1083F, 0x1083F, Script::Cypriot), (0x10840, 0x10855, Script::ImperialAramaic),
    (0x10857, 0x1085F, Script::ImperialAramaic), (0x10860, 0x1087F, Script::Palmyrene),
    (0x10880, 0x1089E, Script::Nabataean), (0x108A7, 0x108AF, Script::Nabataean),
    (0x108E0, 0x108F2, Script::Hatran), (0x108F4, 0x108F5, Script::Hatran),
    (0x108FB, 0x108FF, Script::Hatran), (0x10900, 0x1091B, Script::Phoenician),
    (0x1091F, 0x1091F, Script::Phoenician), (0x10920, 0x10939, Script::Lydian),
    (0x1093F, 0x1093F, Script::Lydian), (0x10980, 0x1099F, Script::MeroiticHieroglyphs),
    (0x109A0, 0x109B7, Script::MeroiticCursive), (0x109BC, 0x109CF, Script::MeroiticCursive),
    (0x109D2, 0x109FF, Script::MeroiticCursive), (0x10A00, 0x10A03, Script::Kharoshthi),
    (0x10A05, 0x10A06, Script::Kharoshthi), (0x10A0C, 0x10A13, Script::Kharoshthi),
    (0x10A15, 0x10A17, Script::Kharoshthi), (0x10A19, 0x10A35, Script::Kharoshthi),
    (0x10A38, 0x10A3A, Script::Kharoshthi), (0x10A3F, 0x10A48, Script::Kharoshthi),
    (0x10A50, 0x10A58, Script::Kharoshthi), (0x10A60, 0x10A7F, Script::OldSouthArabian),
    (0x10A80, 0x10A9F, Script::OldNorthArabian), (0x10AC0, 0x10AE6, Script::Manichaean),
    (0x10AEB, 0x10AF6, Script::Manichaean), (0x10B00, 0x10B35, Script::Avestan),
    (0x10B39, 0x10B3F, Script::Avestan), (0x10B40, 0x10B55, Script::InscriptionalParthian),
    (0x10B58, 0x10B5F, Script::InscriptionalParthian), (0x10B60, 0x10B72, Script::InscriptionalPahlavi),
    (0x10B78, 0x10B7F, Script::InscriptionalPahlavi), (0x10B80, 0x10B91, Script::PsalterPahlavi),
    (0x10B99, 0x10B9C, Script::PsalterPahlavi), (0x10BA9, 0x10BAF, Script::PsalterPahlavi),
    (0x10C00, 0x10C48, Script::OldTurkic), (0x10C80, 0x10CB2, Script::OldHungarian),
    (0x10CC0, 0x10CF2, Script::OldHungarian), (0x10CFA, 0x10CFF, Script::OldHungarian),
    (0x10D00, 0x10D27, Script::HanifiRohingya), (0x10D30, 0x10D39, Script::HanifiRohingya),
    (0x10E60, 0x10E7E, Script::Arabic), (0x10E80, 0x10EA9, Script::Yezidi),
    (0x10EAB, 0x10EAD, Script::Yezidi), (0x10EB0, 0x10EB1, Script::Yezidi),
    (0x10F00, 0x10F27, Script::OldSogdian), (0x10F30, 0x10F59, Script::Sogdian),
    (0x10F70, 0x10F89, Script::OldUyghur), (0x10FB0, 0x10FCB, Script::Chorasmian),
    (0x10FE0, 0x10FF6, Script::Elymaic), (0x11000, 0x1104D, Script::Brahmi),
    (0x11052, 0x11075, Script::Brahmi), (0x1107F, 0x1107F, Script::Brahmi),
    (0x11080, 0x110C2, Script::Kaithi), (0x110CD, 0x110CD, Script::Kaithi),
    (0x110D0, 0x110E8, Script::SoraSompeng), (0x110F0, 0x110F9, Script::SoraSompeng),
    (0x11100, 0x11134, Script::Chakma), (0x11136, 0x11147, Script::Chakma),
    (0x11150, 0x11176, Script::Mahajani), (0x11180, 0x111DF, Script::Sharada),
    (0x111E1, 0x111F4, Script::Sinhala), (0x11200, 0x11211, Script::Khojki),
    (0x11213, 0x1123E, Script::Khojki), (0x11280, 0x11286, Script::Multani),
    (0x11288, 0x11288, Script::Multani), (0x1128A, 0x1128D, Script::Multani),
    (0x1128F, 0x1129D, Script::Multani), (0x1129F, 0x112A9, Script::Multani),
    (0x112B0, 0x112EA, Script::Khudawadi), (0x112F0, 0x112F9, Script::Khudawadi),
    (0x11300, 0x11303, Script::Grantha), (0x11305, 0x1130C, Script::Grantha),
    (0x1130F, 0x11310, Script::Grantha), (0x11313, 0x11328, Script::Grantha),
    (0x1132A, 0x11330, Script::Grantha), (0x11332, 0x11333, Script::Grantha),
    (0x11335, 0x11339, Script::Grantha), (0x1133B, 0x1133B, Script::Inherited),
    (0x1133C, 0x11344, Script::Grantha), (0x11347, 0x11348, Script::Grantha),
    (0x1134B, 0x1134D, Script::Grantha), (0x11350, 0x11350, Script::Grantha),
    (0x11357, 0x11357, Script::Grantha), (0x1135D, 0x11363, Script::Grantha),
    (0x11366, 0x1136C, Script::Grantha), (0x11370, 0x11374, Script::Grantha),
    (0x11400, 0x1145B, Script::Newa), (0x1145D, 0x11461, Script::Newa),
    (0x11480, 0x114C7, Script::Tirhuta), (0x114D0, 0x114D9, Script::Tirhuta),
    (0x11580, 0x115B5, Script::Siddham), (0x115B8, 0x115DD, Script::Siddham),
    (0x11600, 0x11644, Script::Modi), (0x11650, 0x11659, Script::Modi),
    (0x11660, 0x1166C, Script::Mongolian), (0x11680, 0x116B9, Script::Takri),
    (0x116C0, 0x116C9, Script::Takri), (0x11700, 0x1171A, Script::Ahom),
    (0x1171D, 0x1172B, Script::Ahom), (0x11730, 0x11746, Script::Ahom),
    (0x11800, 0x1183B, Script::Dogra), (0x118A0, 0x118F2, Script::WarangCiti),
    (0x118FF, 0x118FF, Script::WarangCiti), (0x11900, 0x11906, Script::DivesAkuru),
    (0x11909, 0x11909, Script::DivesAkuru), (0x1190C, 0x11913, Script::DivesAkuru),
    (0x11915, 0x11916, Script::DivesAkuru), (0x11918, 0x11935, Script::DivesAkuru),
    (0x11937, 0x11938, Script::DivesAkuru), (0x1193B, 0x11946, Script::DivesAkuru),
    (0x11950, 0x11959, Script::DivesAkuru), (0x119A0, 0x119A7, Script::Nandinagari),
    (0x119AA, 0x119D7, Script::Nandinagari), (0x119DA, 0x119E4, Script::Nandinagari),
    (0x11A00, 0x11A47, Script::ZanabazarSquare), (0x11A50, 0x11AA2, Script::Soyombo),
    (0x11AB0, 0x11ABF, Script::CanadianAboriginal), (0x11AC0, 0x11AF8, Script::PauCinHau),
    (0x11C00, 0x11C08, Script::Bhaiksuki), (0x11C0A, 0x11C36, Script::Bhaiksuki),
    (0x11C38, 0x11C45, Script::Bhaiksuki), (0x11C50, 0x11C6C, Script::Bhaiksuki),
    (0x11C70, 0x11C8F, Script::Marchen), (0x11C92, 0x11CA7, Script::Marchen),
    (0x11CA9, 0x11CB6, Script::Marchen), (0x11D00, 0x11D06, Script::MasaramGondi),
    (0x11D08, 0x11D09, Script::MasaramGondi), (0x11D0B, 0x11D36, Script::MasaramGondi),
    (0x11D3A, 0x11D3A, Script::MasaramGondi), (0x11D3C, 0x11D3D, Script::MasaramGondi),
    (0x11D3F, 0x11D47, Script::MasaramGondi), (0x11D50, 0x11D59, Script::MasaramGondi),
    (0x11D60, 0x11D65, Script::GunjalaGondi), (0x11D67, 0x11D68, Script::GunjalaGondi),
    (0x11D6A, 0x11D8E, Script::GunjalaGondi), (0x11D90, 0x11D91, Script::GunjalaGondi),
    (0x11D93, 0x11D98, Script::GunjalaGondi), (0x11DA0, 0x11DA9, Script::GunjalaGondi),
    (0x11EE0, 0x11EF8, Script::Makasar), (0x11FB0, 0x11FB0, Script::Lisu),
    (0x11FC0, 0x11FF1, Script::Tamil), (0x11FFF, 0x11FFF, Script::Tamil),
    (0x12000, 0x12399, Script::Cuneiform), (0x12400, 0x1246E, Script::Cuneiform),
    (0x12470, 0x12474, Script::Cuneiform), (0x12480, 0x12543, Script::Cuneiform),
    (0x12F90, 0x12FF2, Script::CyproMinoan), (0x13000, 0x1342E, Script::EgyptianHieroglyphs),
    (0x13430, 0x13438, Script::EgyptianHieroglyphs), (0x14400, 0x14646, Script::AnatolianHieroglyphs),
    (0x16800, 0x16A38, Script::Bamum), (0x16A40, 0x16A5E, Script::Mro),
    (0x16A60, 0x16A69, Script::Mro), (0x16A6E, 0x16A6F, Script::Mro),
    (0x16A70, 0x16ABE, Script::Tangsa), (0x16AC0, 0x16AC9, Script::Tangsa),
    (0x16AD0, 0x16AED, Script::BassaVah), (0x16AF0, 0x16AF5, Script::BassaVah),
    (0x16B00, 0x16B45, Script::PahawhHmong), (0x16B50, 0x16B59, Script::PahawhHmong),
    (0x16B5B, 0x16B61, Script::PahawhHmong), (0x16B63, 0x16B77, Script::PahawhHmong),
    (0x16B7D, 0x16B8F, Script::PahawhHmong), (0x16E40, 0x16E9A, Script::Medefaidrin),
    (0x16F00, 0x16F4A, Script::Miao), (0x16F4F, 0x16F87, Script::Miao),
    (0x16F8F, 0x16F9F, Script::Miao), (0x16FE0, 0x16FE0, Script::Tangut),
    (0x16FE1, 0x16FE1, Script::Nushu), (0x16FE2, 0x16FE3, Script::Han),
    (0x16FE4, 0x16FE4, Script::KhitanSmallScript), (0x16FF0, 0x16FF1, Script::Han),
    (0x17000, 0x187F7, Script::Tangut), (0x18800, 0x18AFF, Script::Tangut),
    (0x18B00, 0x18CD5, Script::KhitanSmallScript), (0x18D00, 0x18D08, Script::Tangut),
    (0x1AFF0, 0x1AFF3, Script::Katakana), (0x1AFF5, 0x1AFFB, Script::Katakana),
    (0x1AFFD, 0x1AFFE, Script::Katakana), (0x1B000, 0x1B000, Script::Katakana),
    (0x1B001, 0x1B11F, Script::Hiragana), (0x1B120, 0x1B122, Script::Katakana),
    (0x1B150, 0x1B152, Script::Hiragana), (0x1B164, 0x1B167, Script::Katakana),
    (0x1B170, 0x1B2FB, Script::Nushu), (0x1BC00, 0x1BC6A, Script::Duployan),
    (0x1BC70, 0x1BC7C, Script::Duployan), (0x1BC80, 0x1BC88, Script::Duployan),
    (0x1BC90, 0x1BC99, Script::Duployan), (0x1BC9C, 0x1BC9F, Script::Duployan),
    (0x1BCA0, 0x1BCA3, Script::Common), (0x1CF00, 0x1CF2D, Script::Inherited),
    (0x1CF30, 0x1CF46, Script::Inherited), (0x1CF50, 0x1CFC3, Script::Common),
    (0x1D000, 0x1D0F5, Script::Common), (0x1D100, 0x1D126, Script::Common),
    (0x1D129, 0x1D166, Script::Common), (0x1D167, 0x1D169, Script::Inherited),
    (0x1D16A, 0x1D17A, Script::Common), (0x1D17B, 0x1D182, Script::Inherited),
    (0x1D183, 0x1D184, Script::Common), (0x1D185, 0x1D18B, Script::Inherited),
    (0x1D18C, 0x1D1A9, Script::Common), (0x1D1AA, 0x1D1AD, Script::Inherited),
    (0x1D1AE, 0x1D1EA, Script::Common), (0x1D200, 0x1D245, Script::Greek),
    (0x1D2E0, 0x1D2F3, Script::Common), (0x1D300, 0x1D356, Script::Common),
    (0x1D360, 0x1D378, Script::Common), (0x1D400, 0x1D454, Script::Common),
    (0x1D456, 0x1D49C, Script::Common), (0x1D49E, 0x1D49F, Script::Common),
    (0x1D4A2, 0x1D4A2, Script::Common), (0x1D4A5, 0x1D4A6, Script::Common),
    (0x1D4A9, 0x1D4AC, Script::Common), (0x1D4AE, 0x1D4B9, Script::Common),
    (0x1D4BB, 0x1D4BB, Script::Common), (0x1D4BD, 0x1D4C3, Script::Common),
    (0x1D4C5, 0x1D505, Script::Common), (0x1D507, 0x1D50A, Script::Common),
    (0x1D50D, 0x1D514, Script::Common), (0x1D516, 0x1D51C, Script::Common),
    (0x1D51E, 0x1D539, Script::Common), (0x1D53B, 0x1D53E, Script::Common),
    (0x1D540, 0x1D544, Script::Common), (0x1D546, 0x1D546, Script::Common),
    (0x1D54A, 0x1D550, Script::Common), (0x1D552, 0x1D6A5, Script::Common),
    (0x1D6A8, 0x1D7CB, Script::Common), (0x1D7CE, 0x1D7FF, Script::Common),
    (0x1D800, 0x1DA8B, Script::Signwriting), (0x1DA9B, 0x1DA9F, Script::Signwriting),
    (0x1DAA1, 0x1DAAF, Script::Signwriting), (0x1DF00, 0x1DF1E, Script::Latin),
    (0x1E000, 0x1E006, Script::Glagolitic), (0x1E008, 0x1E018, Script::Glagolitic),
    (0x1E01B, 0x1E021, Script::Glagolitic), (0x1E023, 0x1E024, Script::Glagolitic),
    (0x1E026, 0x1E02A, Script::Glagolitic), (0x1E100, 0x1E12C, Script::NyiakengPuachueHmong),
    (0x1E130, 0x1E13D, Script::NyiakengPuachueHmong), (0x1E140, 0x1E149, Script::NyiakengPuachueHmong),
    (0x1E14E, 0x1E14F, Script::NyiakengPuachueHmong), (0x1E290, 0x1E2AE, Script::Toto),
    (0x1E2C0, 0x1E2F9, Script::Wancho), (0x1E2FF, 0x1E2FF, Script::Wancho),
    (0x1E7E0, 0x1E7E6, Script::Ethiopic), (0x1E7E8, 0x1E7EB, Script::Ethiopic),
    (0x1E7ED, 0x1E7EE, Script::Ethiopic), (0x1E7F0, 0x1E7FE, Script::Ethiopic),
    (0x1E800, 0x1E8C4, Script::MendeKikakui), (0x1E8C7, 0x1E8D6, Script::MendeKikakui),
    (0x1E900, 0x1E94B, Script::Adlam), (0x1E950, 0x1E959, Script::Adlam),
    (0x1E95E, 0x1E95F, Script::Adlam), (0x1EC71, 0x1ECB4, Script::Common),
    (0x1ED01, 0x1ED3D, Script::Common), (0x1EE00, 0x1EE03, Script::Arabic),
    (0x1EE05, 0x1EE1F, Script::Arabic), (0x1EE21, 0x1EE22, Script::Arabic),
    (0x1EE24, 0x1EE24, Script::Arabic), (0x1EE27, 0x1EE27, Script::Arabic),
    (0x1EE29, 0x1EE32, Script::Arabic), (0x1EE34, 0x1EE37, Script::Arabic),
    (0x1EE39, 0x1EE39, Script::Arabic), (0x1EE3B, 0x1EE3B, Script::Arabic),
    (0x1EE42, 0x1EE42, Script::Arabic), (0x1EE47, 0x1EE47, Script::Arabic),
    (0x1EE49, 0x1EE49, Script::Arabic), (0x1EE4B, 0x1EE4B, Script::Arabic),
    (0x1EE4D, 0x1EE4F, Script::Arabic), (0x1EE51, 0x1EE52, Script::Arabic),
    (0x1EE54, 0x1EE54, Script::Arabic), (0x1EE57, 0x1EE57, Script::Arabic),
    (0x1EE59, 0x1EE59, Script::Arabic), (0x1EE5B, 0x1EE5B, Script::Arabic),
    (0x1EE5D, 0x1EE5D, Script::Arabic), (0x1EE5F, 0x1EE5F, Script::Arabic),
    (0x1EE61, 0x1EE62, Script::Arabic), (0x1EE64, 0x1EE64, Script::Arabic),
    (0x1EE67, 0x1EE6A, Script::Arabic), (0x1EE6C, 0x1EE72, Script::Arabic),
    (0x1EE74, 0x1EE77, Script::Arabic), (0x1EE79, 0x1EE7C, Script::Arabic),
    (0x1EE7E, 0x1EE7E, Script::Arabic), (0x1EE80, 0x1EE89, Script::Arabic),
    (0x1EE8B, 0x1EE9B, Script::Arabic), (0x1EEA1, 0x1EEA3, Script::Arabic),
    (0x1EEA5, 0x1EEA9, Script::Arabic), (0x1EEAB, 0x1EEBB, Script::Arabic),
    (0x1EEF0, 0x1EEF1, Script::Arabic), (0x1F000, 0x1F02B, Script::Common),
    (0x1F030, 0x1F093, Script::Common), (0x1F0A0, 0x1F0AE, Script::Common),
    (0x1F0B1, 0x1F0BF, Script::Common), (0x1F0C1, 0x1F0CF, Script::Common),
    (0x1F0D1, 0x1F0F5, Script::Common), (0x1F100, 0x1F1AD, Script::Common),
    (0x1F1E6, 0x1F1FF, Script::Common), (0x1F200, 0x1F200, Script::Hiragana),
    (0x1F201, 0x1F202, Script::Common), (0x1F210, 0x1F23B, Script::Common),
    (0x1F240, 0x1F248, Script::Common), (0x1F250, 0x1F251, Script::Common),
    (0x1F260, 0x1F265, Script::Common), (0x1F300, 0x1F6D7, Script::Common),
    (0x1F6DD, 0x1F6EC, Script::Common), (0x1F6F0, 0x1F6FC, Script::Common),
    (0x1F700, 0x1F773, Script::Common), (0x1F780, 0x1F7D8, Script::Common),
    (0x1F7E0, 0x1F7EB, Script::Common), (0x1F7F0, 0x1F7F0, Script::Common),
    (0x1F800, 0x1F80B, Script::Common), (0x1F810, 0x1F847, Script::Common),
    (0x1F850, 0x1F859, Script::Common), (0x1F860, 0x1F887, Script::Common),
    (0x1F890, 0x1F8AD, Script::Common), (0x1F8B0, 0x1F8B1, Script::Common),
    (0x1F900, 0x1FA53, Script::Common), (0x1FA60, 0x1FA6D, Script::Common),
    (0x1FA70, 0x1FA74, Script::Common), (0x1FA78, 0x1FA7C, Script::Common),
    (0x1FA80, 0x1FA86, Script::Common), (0x1FA90, 0x1FAAC, Script::Common),
    (0x1FAB0, 0x1FABA, Script::Common), (0x1FAC0, 0x1FAC5, Script::Common),
    (0x1FAD0, 0x1FAD9, Script::Common), (0x1FAE0, 0x1FAE7, Script::Common),
    (0x1FAF0, 0x1FAF6, Script::Common), (0x1FB00, 0x1FB92, Script::Common),
    (0x1FB94, 0x1FBCA, Script::Common), (0x1FBF0, 0x1FBF9, Script::Common),
    (0x20000, 0x2A6DF, Script::Han), (0x2A700, 0x2B738, Script::Han),
    (0x2B740, 0x2B81D, Script::Han), (0x2B820, 0x2CEA1, Script::Han),
    (0x2CEB0, 0x2EBE0, Script::Han), (0x2F800, 0x2FA1D, Script::Han),
    (0x30000, 0x3134A, Script::Han), (0xE0001, 0xE0001, Script::Common),
    (0xE0020, 0xE007F, Script::Common), (0xE0100, 0xE01EF, Script::Inherited),
];

pub(crate) static ALPHABETIC_TABLE: &[(u32, u32)] = &[
    (0x0041, 0x005A), (0x0061, 0x007A), (0x00AA, 0x00AA), (0x00B5, 0x00B5),
    (0x00BA, 0x00BA), (0x00C0, 0x00D6), (0x00D8, 0x00F6), (0x00F8, 0x02C1),
    (0x02C6, 0x02D1), (0x02E0, 0x02E4), (0x02EC, 0x02EC), (0x02EE, 0x02EE),
    (0x0345, 0x0345), (0x0370, 0x0374), (0x0376, 0x0377), (0x037A, 0x037D),
    (0x037F, 0x037F), (0x0386, 0x0386), (0x0388, 0x038A), (0x038C, 0x038C),
    (0x038E, 0x03A1), (0x03A3, 0x03F5), (0x03F7, 0x0481), (0x048A, 0x052F),
    (0x0531, 0x0556), (0x0559, 0x0559), (0x0560, 0x0588), (0x05B0, 0x05BD),
    (0x05BF, 0x05BF), (0x05C1, 0x05C2), (0x05C4, 0x05C5), (0x05C7, 0x05C7),
    (0x05D0, 0x05EA), (0x05EF, 0x05F2), (0x0610, 0x061A), (0x0620, 0x0657),
    (0x0659, 0x065F), (0x066E, 0x06D3), (0x06D5, 0x06DC), (0x06E1, 0x06E8),
    (0x06ED, 0x06EF), (0x06FA, 0x06FC), (0x06FF, 0x06FF), (0x0710, 0x073F),
    (0x074D, 0x07B1), (0x07CA, 0x07EA), (0x07F4, 0x07F5), (0x07FA, 0x07FA),
    (0x0800, 0x0817), (0x081A, 0x082C), (0x0840, 0x0858), (0x0860, 0x086A),
    (0x0870, 0x0887), (0x0889, 0x088E), (0x08A0, 0x08C9), (0x08D4, 0x08DF),
    (0x08E3, 0x08E9), (0x08F0, 0x093B), (0x093D, 0x094C), (0x094E, 0x0950),
    (0x0955, 0x0963), (0x0971, 0x0983), (0x0985, 0x098C), (0x098F, 0x0990),
    (0x0993, 0x09A8), (0x09AA, 0x09B0), (0x09B2, 0x09B2), (0x09B6, 0x09B9),
    (0x09BD, 0x09C4), (0x09C7, 0x09C8), (0x09CB, 0x09CC), (0x09CE, 0x09CE),
    (0x09D7, 0x09D7), (0x09DC, 0x09DD), (0x09DF, 0x09E3), (0x09F0, 0x09F1),
    (0x09FC, 0x09FC), (0x0A01, 0x0A03), (0x0A05, 0x0A0A), (0x0A0F, 0x0A10),
    (0x0A13, 0x0A28), (0x0A2A, 0x0A30), (0x0A32, 0x0A33), (0x0A35, 0x0A36),
    (0x0A38, 0x0A39), (0x0A3E, 0x0A42), (0x0A47, 0x0A48), (0x0A4B, 0x0A4C),
    (0x0A51, 0x0A51), (0x0A59, 0x0A5C), (0x0A5E, 0x0A5E), (0x0A70, 0x0A75),
    (0x0A81, 0x0A83), (0x0A85, 0x0A8D), (0x0A8F, 0x0A91), (0x0A93, 0x0AA8),
    (0x0AAA, 0x0AB0), (0x0AB2, 0x0AB3), (0x0AB5, 0x0AB9), (0x0ABD, 0x0AC5),
    (0x0AC7, 0x0AC9), (0x0ACB, 0x0ACC), (0x0AD0, 0x0AD0), (0x0AE0, 0x0AE3),
    (0x0AF9, 0x0AFC), (0x0B01, 0x0B03), (0x0B05, 0x0B0C), (0x0B0F, 0x0B10),
    (0x0B13, 0x0B28), (0x0B2A, 0x0B30), (0x0B32, 0x0B33), (0x0B35, 0x0B39),
    (0x0B3D, 0x0B44), (0x0B47, 0x0B48), (0x0B4B, 0x0B4C), (0x0B56, 0x0B57),
    (0x0B5C, 0x0B5D), (0x0B5F, 0x0B63), (0x0B71, 0x0B71), (0x0B82, 0x0B83),
    (0x0B85, 0x0B8A), (0x0B8E, 0x0B90), (0x0B92, 0x0B95), (0x0B99, 0x0B9A),
    (0x0B9C, 0x0B9C), (0x0B9E, 0x0B9F), (0x0BA3, 0x0BA4), (0x0BA8, 0x0BAA),
    (0x0BAE, 0x0BB9), (0x0BBE, 0x0BC2), (0x0BC6, 0x0BC8), (0x0BCA, 0x0BCC),
    (0x0BD0, 0x0BD0), (0x0BD7, 0x0BD7), (0x0C00, 0x0C03), (0x0C05, 0x0C0C),
    (0x0C0E, 0x0C10), (0x0C12, 0x0C28), (0x0C2A, 0x0C39), (0x0C3D, 0x0C44),
    (0x0C46, 0x0C48), (0x0C4A, 0x0C4C), (0x0C55, 0x0C56), (0x0C58, 0x0C5A),
    (0x0C5D, 0x0C5D), (0x0C60, 0x0C63), (0x0C80, 0x0C83), (0x0C85, 0x0C8C),
    (0x0C8E, 0x0C90), (0x0C92, 0x0CA8), (0x0CAA, 0x0CB3), (0x0CB5, 0x0CB9),
    (0x0CBD, 0x0CC4), (0x0CC6, 0x0CC8), (0x0CCA, 0x0CCC), (0x0CD5, 0x0CD6),
    (0x0CDD, 0x0CDE), (0x0CE0, 0x0CE3), (0x0CF1, 0x0CF2), (0x0D00, 0x0D0C),
    (0x0D0E, 0x0D10), (0x0D12, 0x0D3A), (0x0D3D, 0x0D44), (0x0D46, 0x0D48),
    (0x0D4A, 0x0D4C), (0x0D4E, 0x0D4E), (0x0D54, 0x0D57), (0x0D5F, 0x0D63),
    (0x0D7A, 0x0D7F), (0x0D81, 0x0D83), (0x0D85, 0x0D96), (0x0D9A, 0x0DB1),
    (0x0DB3, 0x0DBB), (0x0DBD, 0x0DBD), (0x0DC0, 0x0DC6), (0x0DCF, 0x0DD4),
    (0x0DD6, 0x0DD6), (0x0DD8, 0x0DDF), (0x0DF2, 0x0DF3), (0x0E01, 0x0E3A),
    (0x0E40, 0x0E46), (0x0E4D, 0x0E4D), (0x0E81, 0x0E82), (0x0E84, 0x0E84),
    (0x0E86, 0x0E8A), (0x0E8C, 0x0EA3), (0x0EA5, 0x0EA5), (0x0EA7, 0x0EB9),
    (0x0EBB, 0x0EBD), (0x0EC0, 0x0EC4), (0x0EC6, 0x0EC6), (0x0ECD, 0x0ECD),
    (0x0EDC, 0x0EDF), (0x0F00, 0x0F00), (0x0F40, 0x0F47), (0x0F49, 0x0F6C),
    (0x0F71, 0x0F81), (0x0F88, 0x0F97), (0x0F99, 0x0FBC), (0x1000, 0x1036),
    (0x1038, 0x1038), (0x103B, 0x103F), (0x1050, 0x108F), (0x109A, 0x109D),
    (0x10A0, 0x10C5), (0x10C7, 0x10C7), (0x10CD, 0x10CD), (0x10D0, 0x10FA),
    (0x10FC, 0x1248), (0x124A, 0x124D), (0x1250, 0x1256), (0x1258, 0x1258),
    (0x125A, 0x125D), (0x1260, 0x1288), (0x128A, 0x128D), (0x1290, 0x12B0),
    (0x12B2, 0x12B5), (0x12B8, 0x12BE), (0x12C0, 0x12C0), (0x12C2, 0x12C5),
    (0x12C8, 0x12D6), (0x12D8, 0x1310), (0x1312, 0x1315), (0x1318, 0x135A),
    (0x1380, 0x138F), (0x13A0, 0x13F5), (0x13F8, 0x13FD), (0x1401, 0x166C),
    (0x166F, 0x167F), (0x1681, 0x169A), (0x16A0, 0x16EA), (0x16EE, 0x16F8),
    (0x1700, 0x1713), (0x171F, 0x1733), (0x1740, 0x1753), (0x1760, 0x176C),
    (0x176E, 0x1770), (0x1772, 0x1773), (0x1780, 0x17B3), (0x17B6, 0x17C8),
    (0x17D7, 0x17D7), (0x17DC, 0x17DC), (0x1820, 0x1878), (0x1880, 0x18AA),
    (0x18B0, 0x18F5), (0x1900, 0x191E), (0x1920, 0x192B), (0x1930, 0x1938),
    (0x1950, 0x196D), (0x1970, 0x1974), (0x1980, 0x19AB), (0x19B0, 0x19C9),
    (0x1A00, 0x1A1B), (0x1A20, 0x1A5E), (0x1A61, 0x1A74), (0x1AA7, 0x1AA7),
    (0x1ABF, 0x1AC0), (0x1ACC, 0x1ACE), (0x1B00, 0x1B33), (0x1B35, 0x1B43),
    (0x1B45, 0x1B4C), (0x1B80, 0x1BA9), (0x1BAC, 0x1BAF), (0x1BBA, 0x1BE5),
    (0x1BE7, 0x1BF1), (0x1C00, 0x1C36), (0x1C4D, 0x1C4F), (0x1C5A, 0x1C7D),
    (0x1C80, 0x1C88), (0x1C90, 0x1CBA), (0x1CBD, 0x1CBF), (0x1CE9, 0x1CEC),
    (0x1CEE, 0x1CF3), (0x1CF5, 0x1CF6), (0x1CFA, 0x1CFA), (0x1D00, 0x1DBF),
    (0x1DE7, 0x1DF4), (0x1E00, 0x1F15), (0x1F18, 0x1F1D), (0x1F20, 0x1F45),
    (0x1F48, 0x1F4D), (0x1F50, 0x1F57), (0x1F59, 0x1F59), (0x1F5B, 0x1F5B),
    (0x1F5D, 0x1F5D), (0x1F5F, 0x1F7D), (0x1F80, 0x1FB4), (0x1FB6, 0x1FBC),
    (0x1FBE, 0x1FBE), (0x1FC2, 0x1FC4), (0x1FC6, 0x1FCC), (0x1FD0, 0x1FD3),
    (0x1FD6, 0x1FDB), (0x1FE0, 0x1FEC), (0x1FF2, 0x1FF4), (0x1FF6, 0x1FFC),
    (0x2071, 0x2071), (0x207F, 0x207F), (0x2090, 0x209C), (0x2102, 0x2102),
    (0x2107, 0x2107), (0x210A, 0x2113), (0x2115, 0x2115), (0x2119, 0x211D),
    (0x2124, 0x2124), (0x2126, 0x2126), (0x2128, 0x2128), (0x212A, 0x212D),
    (0x212F, 0x2139), (0x213C, 0x213F), (0x2145, 0x2149), (0x214E, 0x214E),
    (0x2160, 0x2188), (0x24B6, 0x24E9), (0x2C00, 0x2CE4), (0x2CEB, 0x2CEE),
    (0x2CF2, 0x2CF3), (0x2D00, 0x2D25), (0x2D27, 0x2D27), (0x2D2D, 0x2D2D),
    (0x2D30, 0x2D67), (0x2D6F, 0x2D6F), (0x2D80, 0x2D96), (0x2DA0, 0x2DA6),
    (0x2DA8, 0x2DAE), (0x2DB0, 0x2DB6), (0x2DB8, 0x2DBE), (0x2DC0, 0x2DC6),
    (0x2DC8, 0x2DCE), (0x2DD0, 0x2DD6), (0x2DD8, 0x2DDE), (0x2DE0, 0x2DFF),
    (0x2E2F, 0x2E2F), (0x3005, 0x3007), (0x3021, 0x3029), (0x3031, 0x3035),
    (0x3038, 0x303C), (0x3041, 0x3096), (0x309D, 0x309F), (0x30A1, 0x30FA),
    (0x30FC, 0x30FF), (0x3105, 0x312F), (0x3131, 0x318E), (0x31A0, 0x31BF),
    (0x31F0, 0x31FF), (0x3400, 0x4DBF), (0x4E00, 0xA48C), (0xA4D0, 0xA4FD),
    (0xA500, 0xA60C), (0xA610, 0xA61F), (0xA62A, 0xA62B), (0xA640, 0xA66E),
    (0xA674, 0xA67B), (0xA67F, 0xA6EF), (0xA717, 0xA71F), (0xA722, 0xA788),
    (0xA78B, 0xA7CA), (0xA7D0, 0xA7D1), (0xA7D3, 0xA7D3), (0xA7D5, 0xA7D9),
    (0xA7F2, 0xA805), (0xA807, 0xA827), (0xA840, 0xA873), (0xA880, 0xA8C3),
    (0xA8C5, 0xA8C5), (0xA8F2, 0xA8F7), (0xA8FB, 0xA8FB), (0xA8FD, 0xA8FF),
    (0xA90A, 0xA92A), (0xA930, 0xA952), (0xA960, 0xA97C), (0xA980, 0xA9B2),
    (0xA9B4, 0xA9BF), (0xA9CF, 0xA9CF), (0xA9E0, 0xA9EF), (0xA9FA, 0xA9FE),
    (0xAA00, 0xAA36), (0xAA40, 0xAA4D), (0xAA60, 0xAA76), (0xAA7A, 0xAABE),
    (0xAAC0, 0xAAC0), (0xAAC2, 0xAAC2), (0xAADB, 0xAADD), (0xAAE0, 0xAAEF),
    (0xAAF2, 0xAAF5), (0xAB01, 0xAB06), (0xAB09, 0xAB0E), (0xAB11, 0xAB16),
    (0xAB20, 0xAB26), (0xAB28, 0xAB2E), (0xAB30, 0xAB5A), (0xAB5C, 0xAB69),
    (0xAB70, 0xABEA), (0xAC00, 0xD7A3), (0xD7B0, 0xD7C6), (0xD7CB, 0xD7FB),
    (0xF900, 0xFA6D), (0xFA70, 0xFAD9), (0xFB00, 0xFB06), (0xFB13, 0xFB17),
    (0xFB1D, 0xFB28), (0xFB2A, 0xFB36), (0xFB38, 0xFB3C), (0xFB3E, 0xFB3E),
    (0xFB40, 0xFB41), (0xFB43, 0xFB44), (0xFB46, 0xFBB1), (0xFBD3, 0xFD3D),
    (0xFD50, 0xFD8F), (0xFD92, 0xFDC7), (0xFDF0, 0xFDFB), (0xFE70, 0xFE74),
    (0xFE76, 0xFEFC), (0xFF21, 0xFF3A), (0xFF41, 0xFF5A), (0xFF66, 0xFFBE),
    (0xFFC2, 0xFFC7), (0xFFCA, 0xFFCF), (0xFFD2, 0xFFD7), (0xFFDA, 0xFFDC),
    (0x10000, 0x1000B), (0x1000D, 0x10026), (0x10028, 0x1003A), (0x1003C, 0x1003D),
    (0x1003F, 0x1004D), (0x10050, 0x1005D), (0x10080, 0x100FA), (0x10140, 0x10174),
    (0x10280, 0x1029C), (0x102A0, 0x102D0), (0x10300, 0x1031F), (0x1032D, 0x1034A),
    (0x10350, 0x1037A), (0x10380, 0x1039D), (0x103A0, 0x103C3), (0x103C8, 0x103CF),
    (0x103D1, 0x103D5), (0x10400, 0x1049D), (0x104B0, 0x104D3), (0x104D8, 0x104FB),
    (0x10500, 0x10527), (0x10530, 0x10563), (0x10570, 0x1057A), (0x1057C, 0x1058A),
    (0x1058C, 0x10592), (0x10594, 0x10595), (0x10597, 0x105A1), (0x105A3, 0x105B1),
    (0x105B3, 0x105B9), (0x105BB, 0x105BC), (0x10600, 0x10736), (0x10740, 0x10755),
    (0x10760, 0x10767), (0x10780, 0x10785), (0x10787, 0x107B0), (0x107B2, 0x107BA),
    (0x10800, 0x10805), (0x10808, 0x10808), (0x1080A, 0x10835), (0x10837, 0x10838),
    (0x1083C, 0x1083C), (0x1083F, 0x10855), (0x10860, 0x10876), (0x10880, 0x1089E),
    (0x108E0, 0x108F2), (0x108F4, 0x108F5), (0x10900, 0x10915), (0x10920, 0x10939),
    (0x10980, 0x109B7), (0x109BE, 0x109BF), (0x10A00, 0x10A03), (0x10A05, 0x10A06),
    (0x10A0C, 0x10A13), (0x10A15, 0x10A17), (0x10A19, 0x10A35), (0x10A60, 0x10A7C),
    (0x10A80, 0x10A9C), (0x10AC0, 0x10AC7), (0x10AC9, 0x10AE4), (0x10B00, 0x10B35),
    (0x10B40, 0x10B55), (0x10B60, 0x10B72), (0x10B80, 0x10B91), (0x10C00, 0x10C48),
    (0x10C80, 0x10CB2), (0x10CC0, 0x10CF2), (0x10D00, 0x10D27), (0x10E80, 0x10EA9),
    (0x10EAB, 0x10EAC), (0x10EB0, 0x10EB1), (0x10F00, 0x10F1C), (0x10F27, 0x10F27),
    (0x10F30, 0x10F45), (0x10F70, 0x10F81), (0x10FB0, 0x10FC4), (0x10FE0, 0x10FF6),
    (0x11000, 0x11045), (0x11071, 0x11075), (0x11082, 0x110B8), (0x110C2, 0x110C2),
    (0x110D0, 0x110E8), (0x11100, 0x11132), (0x11144, 0x11147), (0x11150, 0x11172),
    (0x11176, 0x11176), (0x11180, 0x111BF), (0x111C1, 0x111C4), (0x111CE, 0x111CF),
    (0x111DA, 0x111DA), (0x111DC, 0x111DC), (0x11200, 0x11211), (0x11213, 0x11234),
    (0x11237, 0x11237), (0x1123E, 0x1123E), (0x11280, 0x11286), (0x11288, 0x11288),
    (0x1128A, 0x1128D), (0x1128F, 0x1129D), (0x1129F, 0x112A8), (0x112B0, 0x112E8),
    (0x11300, 0x11303), (0x11305, 0x1130C), (0x1130F, 0x11310), (0x11313, 0x11328),
    (0x1132A, 0x11330), (0x11332, 0x11333), (0x11335, 0x11339), (0x1133D, 0x11344),
    (0x11347, 0x11348), (0x1134B, 0x1134C), (0x11350, 0x11350), (0x11357, 0x11357),
    (0x1135D, 0x11363), (0x11400, 0x11441), (0x11443, 0x11445), (0x11447, 0x1144A),
    (0x1145F, 0x11461), (0x11480, 0x114C1), (0x114C4, 0x114C5), (0x114C7, 0x114C7),
    (0x11580, 0x115B5), (0x115B8, 0x115BE), (0x115D8, 0x115DD), (0x11600, 0x1163E),
    (0x11640, 0x11640), (0x11644, 0x11644), (0x11680, 0x116B5), (0x116B8, 0x116B8),
    (0x11700, 0x1171A), (0x1171D, 0x1172A), (0x11740, 0x11746), (0x11800, 0x11838),
    (0x118A0, 0x118DF), (0x118FF, 0x11906), (0x11909, 0x11909), (0x1190C, 0x11913),
    (0x11915, 0x11916), (0x11918, 0x11935), (0x11937, 0x11938), (0x1193B, 0x1193C),
    (0x1193F, 0x11942), (0x119A0, 0x119A7), (0x119AA, 0x119D7), (0x119DA, 0x119DF),
    (0x119E1, 0x119E1), (0x119E3, 0x119E4), (0x11A00, 0x11A32), (0x11A35, 0x11A3E),
    (0x11A50, 0x11A97), (0x11A9D, 0x11A9D), (0x11AB0, 0x11AF8), (0x11C00, 0x11C08),
    (0x11C0A, 0x11C36), (0x11C38, 0x11C3E), (0x11C40, 0x11C40), (0x11C72, 0x11C8F),
    (0x11C92, 0x11CA7), (0x11CA9, 0x11CB6), (0x11D00, 0x11D06), (0x11D08, 0x11D09),
    (0x11D0B, 0x11D36), (0x11D3A, 0x11D3A), (0x11D3C, 0x11D3D), (0x11D3F, 0x11D41),
    (0x11D43, 0x11D43), (0x11D46, 0x11D47), (0x11D60, 0x11D65), (0x11D67, 0x11D68),
    (0x11D6A, 0x11D8E), (0x11D90, 0x11D91), (0x11D93, 0x11D96), (0x11D98, 0x11D98),
    (0x11EE0, 0x11EF6), (0x11FB0, 0x11FB0), (0x12000, 0x12399), (0x12400, 0x1246E),
    (0x12480, 0x12543), (0x12F90, 0x12FF0), (0x13000, 0x1342E), (0x14400, 0x14646),
    (0x16800, 0x16A38), (0x16A40, 0x16A5E), (0x16A70, 0x16ABE), (0x16AD0, 0x16AED),
    (0x16B00, 0x16B2F), (0x16B40, 0x16B43), (0x16B63, 0x16B77), (0x16B7D, 0x16B8F),
    (0x16E40, 0x16E7F), (0x16F00, 0x16F4A), (0x16F4F, 0x16F87), (0x16F8F, 0x16F9F),
    (0x16FE0, 0x16FE1), (0x16FE3, 0x16FE3), (0x16FF0, 0x16FF1), (0x17000, 0x187F7),
    (0x18800, 0x18CD5), (0x18D00, 0x18D08), (0x1AFF0, 0x1AFF3), (0x1AFF5, 0x1AFFB),
    (0x1AFFD, 0x1AFFE), (0x1B000, 0x1B122), (0x1B150, 0x1B152), (0x1B164, 0x1B167),
    (0x1B170, 0x1B2FB), (0x1BC00, 0x1BC6A), (0x1BC70, 0x1BC7C), (0x1BC80, 0x1BC88),
    (0x1BC90, 0x1BC99), (0x1BC9E, 0x1BC9E), (0x1D400, 0x1D454), (0x1D456, 0x1D49C),
    (0x1D49E, 0x1D49F), (0x1D4A2, 0x1D4A2), (0x1D4A5, 0x1D4A6), (0x1D4A9, 0x1D4AC),
    (0x1D4AE, 0x1D4B9), (0x1D4BB, 0x1D4BB), (0x1D4BD, 0x1D4C3), (0x1D4C5, 0x1D505),
    (0x1D507, 0x1D50A), (0x1D50D, 0x1D514), (0x1D516, 0x1D51C), (0x1D51E, 0x1D539),
    (0x1D53B, 0x1D53E), (0x1D540, 0x1D544), (0x1D546, 0x1D546), (0x1D54A, 0x1D550),
    (0x1D552, 0x1D6A5), (0x1D6A8, 0x1D6C0), (0x1D6C2, 0x1D6DA), (0x1D6DC, 0x1D6FA),
    (0x1D6FC, 0x1D714), (0x1D716, 0x1D734), (0x1D736, 0x1D74E), (0x1D750, 0x1D76E),
    (0x1D770, 0x1D788), (0x1D78A, 0x1D7A8), (0x1D7AA, 0x1D7C2), (0x1D7C4, 0x1D7CB),
    (0x1DF00, 0x1DF1E), (0x1E000, 0x1E006), (0x1E008, 0x1E018), (0x1E01B, 0x1E021),
    (0x1E023, 0x1E024), (0x1E026, 0x1E02A), (0x1E100, 0x1E12C), (0x1E137, 0x1E13D),
    (0x1E14E, 0x1E14E), (0x1E290, 0x1E2AD), (0x1E2C0, 0x1E2EB), (0x1E7E0, 0x1E7E6),
    (0x1E7E8, 0x1E7EB), (0x1E7ED, 0x1E7EE), (0x1E7F0, 0x1E7FE), (0x1E800, 0x1E8C4),
    (0x1E900, 0x1E943), (0x1E947, 0x1E947), (0x1E94B, 0x1E94B), (0x1EE00, 0x1EE03),
    (0x1EE05, 0x1EE1F), (0x1EE21, 0x1EE22), (0x1EE24, 0x1EE24), (0x1EE27, 0x1EE27),
    (0x1EE29, 0x1EE32), (0x1EE34, 0x1EE37), (0x1EE39, 0x1EE39), (0x1EE3B, 0x1EE3B),
    (0x1EE42, 0x1EE42), (0x1EE47, 0x1EE47), (0x1EE49, 0x1EE49), (0x1EE4B, 0x1EE4B),
    (0x1EE4D, 0x1EE4F), (0x1EE51, 0x1EE52), (0x1EE54, 0x1EE54), (0x1EE57, 0x1EE57),
    (0x1EE59, 0x1EE59), (0x1EE5B, 0x1EE5B), (0x1EE5D, 0x1EE5D), (0x1EE5F, 0x1EE5F),
    (0x1EE61, 0x1EE62), (0x1EE64, 0x1EE64), (0x1EE67, 0x1EE6A), (0x1EE6C, 0x1EE72),
    (0x1EE74, 0x1EE77), (0x1EE79, 0x1EE7C), (0x1EE7E, 0x1EE7E), (0x1EE80, 0x1EE89),
    (0x1EE8B, 0x1EE9B), (0x1EEA1, 0x1EEA3), (0x1EEA5, 0x1EEA9), (0x1EEAB, 0x1EEBB),
    (0x1F130, 0x1F149), (0x1F150, 0x1F169), (0x1F170, 0x1F189), (0x20000, 0x2A6DF),
    (0x2A700, 0x2B738), (0x2B740, 0x2B81D), (0x2B820, 0x2CEA1), (0x2CEB0, 0x2EBE0),
    (0x2F800, 0x2FA1D), (0x30000, 0x3134A),
];

pub(crate) static LOWERCASE_TABLE: &[(u32, u32)] = &[
    (0x0061, 0x007A), (0x00AA, 0x00AA), (0x00B5, 0x00B5), (0x00BA, 0x00BA),
    (0x00DF, 0x00F6), (0x00F8, 0x00FF), (0x0101, 0x0101), (0x0103, 0x0103),
    (0x0105, 0x0105), (0x0107, 0x0107), (0x0109, 0x0109), (0x010B, 0x010B),
    (0x010D, 0x010D), (0x010F, 0x010F), (0x0111, 0x0111), (0x0113, 0x0113),
    (0x0115, 0x0115), (0x0117, 0x0117), (0x0119, 0x0119), (0x011B, 0x011B),
    (0x011D, 0x011D), (0x011F, 0x011F), (0x0121, 0x0121), (0x0123, 0x0123),
    (0x0125, 0x0125), (0x0127, 0x0127), (0x0129, 0x0129), (0x012B, 0x012B),
    (0x012D, 0x012D), (0x012F, 0x012F), (0x0131, 0x0131), (0x0133, 0x0133),
    (0x0135, 0x0135), (0x0137, 0x0138), (0x013A, 0x013A), (0x013C, 0x013C),
    (0x013E, 0x013E), (0x0140, 0x0140), (0x0142, 0x0142), (0x0144, 0x0144),
    (0x0146, 0x0146), (0x0148, 0x0149), (0x014B, 0x014B), (0x014D, 0x014D),
    (0x014F, 0x014F), (0x0151, 0x0151), (0x0153, 0x0153), (0x0155, 0x0155),
    (0x0157, 0x0157), (0x0159, 0x0159), (0x015B, 0x015B), (0x015D, 0x015D),
    (0x015F, 0x015F), (0x0161, 0x0161), (0x0163, 0x0163), (0x0165, 0x0165),
    (0x0167, 0x0167), (0x0169, 0x0169), (0x016B, 0x016B), (0x016D, 0x016D),
    (0x016F, 0x016F), (0x0171, 0x0171), (0x0173, 0x0173), (0x0175, 0x0175),
    (0x0177, 0x0177), (0x017A, 0x017A), (0x017C, 0x017C), (0x017E, 0x0180),
    (0x0183, 0x0183), (0x0185, 0x0185), (0x0188, 0x0188), (0x018C, 0x018D),
    (0x0192, 0x0192), (0x0195, 0x0195), (0x0199, 0x019B), (0x019E, 0x019E),
    (0x01A1, 0x01A1), (0x01A3, 0x01A3), (0x01A5, 0x01A5), (0x01A8, 0x01A8),
    (0x01AA, 0x01AB), (0x01AD, 0x01AD), (0x01B0, 0x01B0), (0x01B4, 0x01B4),
    (0x01B6, 0x01B6), (0x01B9, 0x01BA), (0x01BD, 0x01BF), (0x01C6, 0x01C6),
    (0x01C9, 0x01C9), (0x01CC, 0x01CC), (0x01CE, 0x01CE), (0x01D0, 0x01D0),
    (0x01D2, 0x01D2), (0x01D4, 0x01D4), (0x01D6, 0x01D6), (0x01D8, 0x01D8),
    (0x01DA, 0x01DA), (0x01DC, 0x01DD), (0x01DF, 0x01DF), (0x01E1, 0x01E1),
    (0x01E3, 0x01E3), (0x01E5, 0x01E5), (0x01E7, 0x01E7), (0x01E9, 0x01E9),
    (0x01EB, 0x01EB), (0x01ED, 0x01ED), (0x01EF, 0x01F0), (0x01F3, 0x01F3),
    (0x01F5, 0x01F5), (0x01F9, 0x01F9), (0x01FB, 0x01FB), (0x01FD, 0x01FD),
    (0x01FF, 0x01FF), (0x0201, 0x0201), (0x0203, 0x0203), (0x0205, 0x0205),
    (0x0207, 0x0207), (0x0209, 0x0209), (0x020B, 0x020B), (0x020D, 0x020D),
    (0x020F, 0x020F), (0x0211, 0x0211), (0x0213, 0x0213), (0x0215, 0x0215),
    (0x0217, 0x0217), (0x0219, 0x0219), (0x021B, 0x021B), (0x021D, 0x021D),
    (0x021F, 0x021F), (0x0221, 0x0221), (0x0223, 0x0223), (0x0225, 0x0225),
    (0x0227, 0x0227), (0x0229, 0x0229), (0x022B, 0x022B), (0x022D, 0x022D),
    (0x022F, 0x022F), (0x0231, 0x0231), (0x0233, 0x0239), (0x023C, 0x023C),
    (0x023F, 0x0240), (0x0242, 0x0242), (0x0247, 0x0247), (0x0249, 0x0249),
    (0x024B, 0x024B), (0x024D, 0x024D), (0x024F, 0x0293), (0x0295, 0x02B8),
    (0x02C0, 0x02C1), (0x02E0, 0x02E4), (0x0345, 0x0345), (0x0371, 0x0371),
    (0x0373, 0x0373), (0x0377, 0x0377), (0x037A, 0x037D), (0x0390, 0x0390),
    (0x03AC, 0x03CE), (0x03D0, 0x03D1), (0x03D5, 0x03D7), (0x03D9, 0x03D9),
    (0x03DB, 0x03DB), (0x03DD, 0x03DD), (0x03DF, 0x03DF), (0x03E1, 0x03E1),
    (0x03E3, 0x03E3), (0x03E5, 0x03E5), (0x03E7, 0x03E7), (0x03E9, 0x03E9),
    (0x03EB, 0x03EB), (0x03ED, 0x03ED), (0x03EF, 0x03F3), (0x03F5, 0x03F5),
    (0x03F8, 0x03F8), (0x03FB, 0x03FC), (0x0430, 0x045F), (0x0461, 0x0461),
    (0x0463, 0x0463), (0x0465, 0x0465), (0x0467, 0x0467), (0x0469, 0x0469),
    (0x046B, 0x046B), (0x046D, 0x046D), (0x046F, 0x046F), (0x0471, 0x0471),
    (0x0473, 0x0473), (0x0475, 0x0475), (0x0477, 0x0477), (0x0479, 0x0479),
    (0x047B, 0x047B), (0x047D, 0x047D), (0x047F, 0x047F), (0x0481, 0x0481),
    (0x048B, 0x048B), (0x048D, 0x048D), (0x048F, 0x048F), (0x0491, 0x0491),
    (0x0493, 0x0493), (0x0495, 0x0495), (0x0497, 0x0497), (0x0499, 0x0499),
    (0x049B, 0x049B), (0x049D, 0x049D), (0x049F, 0x049F), (0x04A1, 0x04A1),
    (0x04A3, 0x04A3), (0x04A5, 0x04A5), (0x04A7, 0x04A7), (0x04A9, 0x04A9),
    (0x04AB, 0x04AB), (0x04AD, 0x04AD), (0x04AF, 0x04AF), (0x04B1, 0x04B1),
    (0x04B3, 0x04B3), (0x04B5, 0x04B5), (0x04B7, 0x04B7), (0x04B9, 0x04B9),
    (0x04BB, 0x04BB), (0x04BD, 0x04BD), (0x04BF, 0x04BF), (0x04C2, 0x04C2),
    (0x04C4, 0x04C4), (0x04C6, 0x04C6), (0x04C8, 0x04C8), (0x04CA, 0x04CA),
    (0x04CC, 0x04CC), (0x04CE, 0x04CF), (0x04D1, 0x04D1), (0x04D3, 0x04D3),
    (0x04D5, 0x04D5), (0x04D7, 0x04D7), (0x04D9, 0x04D9), (0x04DB, 0x04DB),
    (0x04DD, 0x04DD), (0x04DF, 0x04DF), (0x04E1, 0x04E1), (0x04E3, 0x04E3),
    (0x04E5, 0x04E5), (0x04E7, 0x04E7), (0x04E9, 0x04E9), (0x04EB, 0x04EB),
    (0x04ED, 0x04ED), (0x04EF, 0x04EF), (0x04F1, 0x04F1), (0x04F3, 0x04F3),
    (0x04F5, 0x04F5), (0x04F7, 0x04F7), (0x04F9, 0x04F9), (0x04FB, 0x04FB),
    (0x04FD, 0x04FD), (0x04FF, 0x04FF), (0x0501, 0x0501), (0x0503, 0x0503),
    (0x0505, 0x0505), (0x0507, 0x0507), (0x0509, 0x0509), (0x050B, 0x050B),
    (0x050D, 0x050D), (0x050F, 0x050F), (0x0511, 0x0511), (0x0513, 0x0513),
    (0x0515, 0x0515), (0x0517, 0x0517), (0x0519, 0x0519), (0x051B, 0x051B),
    (0x051D, 0x051D), (0x051F, 0x051F), (0x0521, 0x0521), (0x0523, 0x0523),
    (0x0525, 0x0525), (0x0527, 0x0527), (0x0529, 0x0529), (0x052B, 0x052B),
    (0x052D, 0x052D), (0x052F, 0x052F), (0x0560, 0x0588), (0x10D0, 0x10FA),
    (0x10FD, 0x10FF), (0x13F8, 0x13FD), (0x1C80, 0x1C88), (0x1D00, 0x1DBF),
    (0x1E01, 0x1E01), (0x1E03, 0x1E03), (0x1E05, 0x1E05), (0x1E07, 0x1E07),
    (0x1E09, 0x1E09), (0x1E0B, 0x1E0B), (0x1E0D, 0x1E0D), (0x1E0F, 0x1E0F),
    (0x1E11, 0x1E11), (0x1E13, 0x1E13), (0x1E15, 0x1E15), (0x1E17, 0x1E17),
    (0x1E19, 0x1E19), (0x1E1B, 0x1E1B), (0x1E1D, 0x1E1D), (0x1E1F, 0x1E1F),
    (0x1E21, 0x1E21), (0x1E23, 0x1E23), (0x1E25, 0x1E25), (0x1E27, 0x1E27),
    (0x1E29, 0x1E29), (0x1E2B, 0x1E2B), (0x1E2D, 0x1E2D), (0x1E2F, 0x1E2F),
    (0x1E31, 0x1E31), (0x1E33, 0x1E33), (0x1E35, 0x1E35), (0x1E37, 0x1E37),
    (0x1E39, 0x1E39), (0x1E3B, 0x1E3B), (0x1E3D, 0x1E3D), (0x1E3F, 0x1E3F),
    (0x1E41, 0x1E41), (0x1E43, 0x1E43), (0x1E45, 0x1E45), (0x1E47, 0x1E47),
    (0x1E49, 0x1E49), (0x1E4B, 0x1E4B), (0x1E4D, 0x1E4D), (0x1E4F, 0x1E4F),
    (0x1E51, 0x1E51), (0x1E53, 0x1E53), (0x1E55, 0x1E55), (0x1E57, 0x1E57),
    (0x1E59, 0x1E59), (0x1E5B, 0x1E5B), (0x1E5D, 0x1E5D), (0x1E5F, 0x1E5F),
    (0x1E61, 0x1E61), (0x1E63, 0x1E63), (0x1E65, 0x1E65), (0x1E67, 0x1E67),
    (0x1E69, 0x1E69), (0x1E6B, 0x1E6B), (0x1E6D, 0x1E6D), (0x1E6F, 0x1E6F),
    (0x1E71, 0x1E71), (0x1E73, 0x1E73), (0x1E75, 0x1E75), (0x1E77, 0x1E77),
    (0x1E79, 0x1E79), (0x1E7B, 0x1E7B), (0x1E7D, 0x1E7D), (0x1E7F, 0x1E7F),
    (0x1E81, 0x1E81), (0x1E83, 0x1E83), (0x1E85, 0x1E85), (0x1E87, 0x1E87),
    (0x1E89, 0x1E89), (0x1E8B, 0x1E8B), (0x1E8D, 0x1E8D), (0x1E8F, 0x1E8F),
    (0x1E91, 0x1E91), (0x1E93, 0x1E93), (0x1E95, 0x1E9D), (0x1E9F, 0x1E9F),
    (0x1EA1, 0x1EA1), (0x1EA3, 0x1EA3), (0x1EA5, 0x1EA5), (0x1EA7, 0x1EA7),
    (0x1EA9, 0x1EA9), (0x1EAB, 0x1EAB), (0x1EAD, 0x1EAD), (0x1EAF, 0x1EAF),
    (0x1EB1, 0x1EB1), (0x1EB3, 0x1EB3), (0x1EB5, 0x1EB5), (0x1EB7, 0x1EB7),
    (0x1EB9, 0x1EB9), (0x1EBB, 0x1EBB), (0x1EBD, 0x1EBD), (0x1EBF, 0x1EBF),
    (0x1EC1, 0x1EC1), (0x1EC3, 0x1EC3), (0x1EC5, 0x1EC5), (0x1EC7, 0x1EC7),
    (0x1EC9, 0x1EC9), (0x1ECB, 0x1ECB), (0x1ECD, 0x1ECD), (0x1ECF, 0x1ECF),
    (0x1ED1, 0x1ED1), (0x1ED3, 0x1ED3), (0x1ED5, 0x1ED5), (0x1ED7, 0x1ED7),
    (0x1ED9, 0x1ED9), (0x1EDB, 0x1EDB), (0x1EDD, 0x1EDD), (0x1EDF, 0x1EDF),
    (0x1EE1, 0x1EE1), (0x1EE3, 0x1EE3), (0x1EE5, 0x1EE5), (0x1EE7, 0x1EE7),
    (0x1EE9, 0x1EE9), (0x1EEB, 0x1EEB), (0x1EED, 0x1EED), (0x1EEF, 0x1EEF),
    (0x1EF1, 0x1EF1), (0x1EF3, 0x1EF3), (0x1EF5, 0x1EF5), (0x1EF7, 0x1EF7),
    (0x1EF9, 0x1EF9), (0x1EFB, 0x1EFB), (0x1EFD, 0x1EFD), (0x1EFF, 0x1F07),
    (0x1F10, 0x1F15), (0x1F20, 0x1F27), (0x1F30, 0x1F37), (0x1F40, 0x1F45),
    (0x1F50, 0x1F57), (0x1F60, 0x1F67), (0x1F70, 0x1F7D), (0x1F80, 0x1F87),
    (0x1F90, 0x1F97), (0x1FA0, 0x1FA7), (0x1FB0, 0x1FB4), (0x1FB6, 0x1FB7),
    (0x1FBE, 0x1FBE), (0x1FC2, 0x1FC4), (0x1FC6, 0x1FC7), (0x1FD0, 0x1FD3),
    (0x1FD6, 0x1FD7), (0x1FE0, 0x1FE7), (0x1FF2, 0x1FF4), (0x1FF6, 0x1FF7),
    (0x2071, 0x2071), (0x207F, 0x207F), (0x2090, 0x209C), (0x210A, 0x210A),
    (0x210E, 0x210F), (0x2113, 0x2113), (0x212F, 0x212F), (0x2134, 0x2134),
    (0x2139, 0x2139), (0x213C, 0x213D), (0x2146, 0x2149), (0x214E, 0x214E),
    (0x2170, 0x217F), (0x2184, 0x2184), (0x24D0, 0x24E9), (0x2C30, 0x2C5F),
    (0x2C61, 0x2C61), (0x2C65, 0x2C66), (0x2C68, 0x2C68), (0x2C6A, 0x2C6A),
    (0x2C6C, 0x2C6C), (0x2C71, 0x2C71), (0x2C73, 0x2C74), (0x2C76, 0x2C7D),
    (0x2C81, 0x2C81), (0x2C83, 0x2C83), (0x2C85, 0x2C85), (0x2C87, 0x2C87),
    (0x2C89, 0x2C89), (0x2C8B, 0x2C8B), (0x2C8D, 0x2C8D), (0x2C8F, 0x2C8F),
    (0x2C91, 0x2C91), (0x2C93, 0x2C93), (0x2C95, 0x2C95), (0x2C97, 0x2C97),
    (0x2C99, 0x2C99), (0x2C9B, 0x2C9B), (0x2C9D, 0x2C9D), (0x2C9F, 0x2C9F),
    (0x2CA1, 0x2CA1), (0x2CA3, 0x2CA3), (0x2CA5, 0x2CA5), (0x2CA7, 0x2CA7),
    (0x2CA9, 0x2CA9), (0x2CAB, 0x2CAB), (0x2CAD, 0x2CAD), (0x2CAF, 0x2CAF),
    (0x2CB1, 0x2CB1), (0x2CB3, 0x2CB3), (0x2CB5, 0x2CB5), (0x2CB7, 0x2CB7),
    (0x2CB9, 0x2CB9), (0x2CBB, 0x2CBB), (0x2CBD, 0x2CBD), (0x2CBF, 0x2CBF),
    (0x2CC1, 0x2CC1), (0x2CC3, 0x2CC3), (0x2CC5, 0x2CC5), (0x2CC7, 0x2CC7),
    (0x2CC9, 0x2CC9), (0x2CCB, 0x2CCB), (0x2CCD, 0x2CCD), (0x2CCF, 0x2CCF),
    (0x2CD1, 0x2CD1), (0x2CD3, 0x2CD3), (0x2CD5, 0x2CD5), (0x2CD7, 0x2CD7),
    (0x2CD9, 0x2CD9), (0x2CDB, 0x2CDB), (0x2CDD, 0x2CDD), (0x2CDF, 0x2CDF),
    (0x2CE1, 0x2CE1), (0x2CE3, 0x2CE4), (0x2CEC, 0x2CEC), (0x2CEE, 0x2CEE),
    (0x2CF3, 0x2CF3), (0x2D00, 0x2D25), (0x2D27, 0x2D27), (0x2D2D, 0x2D2D),
    (0xA641, 0xA641), (0xA643, 0xA643), (0xA645, 0xA645), (0xA647, 0xA647),
    (0xA649, 0xA649), (0xA64B, 0xA64B), (0xA64D, 0xA64D), (0xA64F, 0xA64F),
    (0xA651, 0xA651), (0xA653, 0xA653), (0xA655, 0xA655), (0xA657, 0xA657),
    (0xA659, 0xA659), (0xA65B, 0xA65B), (0xA65D, 0xA65D), (0xA65F, 0xA65F),
    (0xA661, 0xA661), (0xA663, 0xA663), (0xA665, 0xA665), (0xA667, 0xA667),
    (0xA669, 0xA669), (0xA66B, 0xA66B), (0xA66D, 0xA66D), (0xA681, 0xA681),
    (0xA683, 0xA683), (0xA685, 0xA685), (0xA687, 0xA687), (0xA689, 0xA689),
    (0xA68B, 0xA68B), (0xA68D, 0xA68D), (0xA68F, 0xA68F), (0xA691, 0xA691),
    (0xA693, 0xA693), (0xA695, 0xA695), (0xA697, 0xA697), (0xA699, 0xA699),
    (0xA69B, 0xA69D), (0xA723, 0xA723), (0xA725, 0xA725), (0xA727, 0xA727),
    (0xA729, 0xA729), (0xA72B, 0xA72B), (0xA72D, 0xA72D), (0xA72F, 0xA731),
    (0xA733, 0xA733), (0xA735, 0xA735), (0xA737, 0xA737), (0xA739, 0xA739),
    (0xA73B, 0xA73B), (0xA73D, 0xA73D), (0xA73F, 0xA73F), (0xA741, 0xA741),
    (0xA743, 0xA743), (0xA745, 0xA745), (0xA747, 0xA747), (0xA749, 0xA749),
    (0xA74B, 0xA74B), (0xA74D, 0xA74D), (0xA74F, 0xA74F), (0xA751, 0xA751),
    (0xA753, 0xA753), (0xA755, 0xA755), (0xA757, 0xA757), (0xA759, 0xA759),
    (0xA75B, 0xA75B), (0xA75D, 0xA75D), (0xA75F, 0xA75F), (0xA761, 0xA761),
    (0xA763, 0xA763), (0xA765, 0xA765), (0xA767, 0xA767), (0xA769, 0xA769),
    (0xA76B, 0xA76B), (0xA76D, 0xA76D), (0xA76F, 0xA778), (0xA77A, 0xA77A),
    (0xA77C, 0xA77C), (0xA77F, 0xA77F), (0xA781, 0xA781), (0xA783, 0xA783),
    (0xA785, 0xA785), (0xA787, 0xA787), (0xA78C, 0xA78C), (0xA78E, 0xA78E),
    (0xA791, 0xA791), (0xA793, 0xA795), (0xA797, 0xA797), (0xA799, 0xA799),
    (0xA79B, 0xA79B), (0xA79D, 0xA79D), (0xA79F, 0xA79F), (0xA7A1, 0xA7A1),
    (0xA7A3, 0xA7A3), (0xA7A5, 0xA7A5), (0xA7A7, 0xA7A7), (0xA7A9, 0xA7A9),
    (0xA7AF, 0xA7AF), (0xA7B5, 0xA7B5), (0xA7B7, 0xA7B7), (0xA7B9, 0xA7B9),
    (0xA7BB, 0xA7BB), (0xA7BD, 0xA7BD), (0xA7BF, 0xA7BF), (0xA7C1, 0xA7C1),
    (0xA7C3, 0xA7C3), (0xA7C8, 0xA7C8), (0xA7CA, 0xA7CA), (0xA7D1, 0xA7D1),
    (0xA7D3, 0xA7D3), (0xA7D5, 0xA7D5), (0xA7D7, 0xA7D7), (0xA7D9, 0xA7D9),
    (0xA7F6, 0xA7F6), (0xA7F8, 0xA7FA), (0xAB30, 0xAB5A), (0xAB5C, 0xAB68),
    (0xAB70, 0xABBF), (0xFB00, 0xFB06), (0xFB13, 0xFB17), (0xFF41, 0xFF5A),
    (0x10428, 0x1044F), (0x104D8, 0x104FB), (0x10597, 0x105A1), (0x105A3, 0x105B1),
    (0x105B3, 0x105B9), (0x105BB, 0x105BC), (0x10780, 0x10780), (0x10783, 0x10785),
    (0x10787, 0x107B0), (0x107B2, 0x107BA), (0x10CC0, 0x10CF2), (0x118C0, 0x118DF),
    (0x16E60, 0x16E7F), (0x1D41A, 0x1D433), (0x1D44E, 0x1D454), (0x1D456, 0x1D467),
    (0x1D482, 0x1D49B), (0x1D4B6, 0x1D4B9), (0x1D4BB, 0x1D4BB), (0x1D4BD, 0x1D4C3),
    (0x1D4C5, 0x1D4CF), (0x1D4EA, 0x1D503), (0x1D51E, 0x1D537), (0x1D552, 0x1D56B),
    (0x1D586, 0x1D59F), (0x1D5BA, 0x1D5D3), (0x1D5EE, 0x1D607), (0x1D622, 0x1D63B),
    (0x1D656, 0x1D66F), (0x1D68A, 0x1D6A5), (0x1D6C2, 0x1D6DA), (0x1D6DC, 0x1D6E1),
    (0x1D6FC, 0x1D714), (0x1D716, 0x1D71B), (0x1D736, 0x1D74E), (0x1D750, 0x1D755),
    (0x1D770, 0x1D788), (0x1D78A, 0x1D78F), (0x1D7AA, 0x1D7C2), (0x1D7C4, 0x1D7C9),
    (0x1D7CB, 0x1D7CB), (0x1DF00, 0x1DF09), (0x1DF0B, 0x1DF1E), (0x1E922, 0x1E943),
];

pub(crate) static UPPERCASE_TABLE: &[(u32, u32)] = &[
    (0x0041, 0x005A), (0x00C0, 0x00D6), (0x00D8, 0x00DE), (0x0100, 0x0100),
    (0x0102, 0x0102), (0x0104, 0x0104), (0x0106, 0x0106), (0x0108, 0x0108),
    (0x010A, 0x010A), (0x010C, 0x010C), (0x010E, 0x010E), (0x0110, 0x0110),
    (0x0112, 0x0112), (0x0114, 0x0114), (0x0116, 0x0116), (0x0118, 0x0118),
    (0x011A, 0x011A), (0x011C, 0x011C), (0x011E, 0x011E), (0x0120, 0x0120),
    (0x0122, 0x0122), (0x0124, 0x0124), (0x0126, 0x0126), (0x0128, 0x0128),
    (0x012A, 0x012A), (0x012C, 0x012C), (0x012E, 0x012E), (0x0130, 0x0130),
    (0x0132, 0x0132), (0x0134, 0x0134), (0x0136, 0x0136), (0x0139, 0x0139),
    (0x013B, 0x013B), (0x013D, 0x013D), (0x013F, 0x013F), (0x0141, 0x0141),
    (0x0143, 0x0143), (0x0145, 0x0145), (0x0147, 0x0147), (0x014A, 0x014A),
    (0x014C, 0x014C), (0x014E, 0x014E), (0x0150, 0x0150), (0x0152, 0x0152),
    (0x0154, 0x0154), (0x0156, 0x0156), (0x0158, 0x0158), (0x015A, 0x015A),
    (0x015C, 0x015C), (0x015E, 0x015E), (0x0160, 0x0160), (0x0162, 0x0162),
    (0x0164, 0x0164), (0x0166, 0x0166), (0x0168, 0x0168), (0x016A, 0x016A),
    (0x016C, 0x016C), (0x016E, 0x016E), (0x0170, 0x0170), (0x0172, 0x0172),
    (0x0174, 0x0174), (0x0176, 0x0176), (0x0178, 0x0179), (0x017B, 0x017B),
    (0x017D, 0x017D), (0x0181, 0x0182), (0x0184, 0x0184), (0x0186, 0x0187),
    (0x0189, 0x018B), (0x018E, 0x0191), (0x0193, 0x0194), (0x0196, 0x0198),
    (0x019C, 0x019D), (0x019F, 0x01A0), (0x01A2, 0x01A2), (0x01A4, 0x01A4),
    (0x01A6, 0x01A7), (0x01A9, 0x01A9), (0x01AC, 0x01AC), (0x01AE, 0x01AF),
    (0x01B1, 0x01B3), (0x01B5, 0x01B5), (0x01B7, 0x01B8), (0x01BC, 0x01BC),
    (0x01C4, 0x01C4), (0x01C7, 0x01C7), (0x01CA, 0x01CA), (0x01CD, 0x01CD),
    (0x01CF, 0x01CF), (0x01D1, 0x01D1), (0x01D3, 0x01D3), (0x01D5, 0x01D5),
    (0x01D7, 0x01D7), (0x01D9, 0x01D9), (0x01DB, 0x01DB), (0x01DE, 0x01DE),
    (0x01E0, 0x01E0), (0x01E2, 0x01E2), (0x01E4, 0x01E4), (0x01E6, 0x01E6),
    (0x01E8, 0x01E8), (0x01EA, 0x01EA), (0x01EC, 0x01EC), (0x01EE, 0x01EE),
    (0x01F1, 0x01F1), (0x01F4, 0x01F4), (0x01F6, 0x01F8), (0x01FA, 0x01FA),
    (0x01FC, 0x01FC), (0x01FE, 0x01FE), (0x0200, 0x0200), (0x0202, 0x0202),
    (0x0204, 0x0204), (0x0206, 0x0206), (0x0208, 0x0208), (0x020A, 0x020A),
    (0x020C, 0x020C), (0x020E, 0x020E), (0x0210, 0x0210), (0x0212, 0x0212),
    (0x0214, 0x0214), (0x0216, 0x0216), (0x0218, 0x0218), (0x021A, 0x021A),
    (0x021C, 0x021C), (0x021E, 0x021E), (0x0220, 0x0220), (0x0222, 0x0222),
    (0x0224, 0x0224), (0x0226, 0x0226), (0x0228, 0x0228), (0x022A, 0x022A),
    (0x022C, 0x022C), (0x022E, 0x022E), (0x0230, 0x0230), (0x0232, 0x0232),
    (0x023A, 0x023B), (0x023D, 0x023E), (0x0241, 0x0241), (0x0243, 0x0246),
    (0x0248, 0x0248), (0x024A, 0x024A), (0x024C, 0x024C), (0x024E, 0x024E),
    (0x0370, 0x0370), (0x0372, 0x0372), (0x0376, 0x0376), (0x037F, 0x037F),
    (0x0386, 0x0386), (0x0388, 0x038A), (0x038C, 0x038C), (0x038E, 0x038F),
    (0x0391, 0x03A1), (0x03A3, 0x03AB), (0x03CF, 0x03CF), (0x03D2, 0x03D4),
    (0x03D8, 0x03D8), (0x03DA, 0x03DA), (0x03DC, 0x03DC), (0x03DE, 0x03DE),
    (0x03E0, 0x03E0), (0x03E2, 0x03E2), (0x03E4, 0x03E4), (0x03E6, 0x03E6),
    (0x03E8, 0x03E8), (0x03EA, 0x03EA), (0x03EC, 0x03EC), (0x03EE, 0x03EE),
    (0x03F4, 0x03F4), (0x03F7, 0x03F7), (0x03F9, 0x03FA), (0x03FD, 0x042F),
    (0x0460, 0x0460), (0x0462, 0x0462), (0x0464, 0x0464), (0x0466, 0x0466),
    (0x0468, 0x0468), (0x046A, 0x046A), (0x046C, 0x046C), (0x046E, 0x046E),
    (0x0470, 0x0470), (0x0472, 0x0472), (0x0474, 0x0474), (0x0476, 0x0476),
    (0x0478, 0x0478), (0x047A, 0x047A), (0x047C, 0x047C), (0x047E, 0x047E),
    (0x0480, 0x0480), (0x048A, 0x048A), (0x048C, 0x048C), (0x048E, 0x048E),
    (0x0490, 0x0490), (0x0492, 0x0492), (0x0494, 0x0494), (0x0496, 0x0496),
    (0x0498, 0x0498), (0x049A, 0x049A), (0x049C, 0x049C), (0x049E, 0x049E),
    (0x04A0, 0x04A0), (0x04A2, 0x04A2), (0x04A4, 0x04A4), (0x04A6, 0x04A6),
    (0x04A8, 0x04A8), (0x04AA, 0x04AA), (0x04AC, 0x04AC), (0x04AE, 0x04AE),
    (0x04B0, 0x04B0), (0x04B2, 0x04B2), (0x04B4, 0x04B4), (0x04B6, 0x04B6),
    (0x04B8, 0x04B8), (0x04BA, 0x04BA), (0x04BC, 0x04BC), (0x04BE, 0x04BE),
    (0x04C0, 0x04C1), (0x04C3, 0x04C3), (0x04C5, 0x04C5), (0x04C7, 0x04C7),
    (0x04C9, 0x04C9), (0x04CB, 0x04CB), (0x04CD, 0x04CD), (0x04D0, 0x04D0),
    (0x04D2, 0x04D2), (0x04D4, 0x04D4), (0x04D6, 0x04D6), (0x04D8, 0x04D8),
    (0x04DA, 0x04DA), (0x04DC, 0x04DC), (0x04DE, 0x04DE), (0x04E0, 0x04E0),
    (0x04E2, 0x04E2), (0x04E4, 0x04E4), (0x04E6, 0x04E6), (0x04E8, 0x04E8),
    (0x04EA, 0x04EA), (0x04EC, 0x04EC), (0x04EE, 0x04EE), (0x04F0, 0x04F0),
    (0x04F2, 0x04F2), (0x04F4, 0x04F4), (0x04F6, 0x04F6), (0x04F8, 0x04F8),
    (0x04FA, 0x04FA), (0x04FC, 0x04FC), (0x04FE, 0x04FE), (0x0500, 0x0500),
    (0x0502, 0x0502), (0x0504, 0x0504), (0x0506, 0x0506), (0x0508, 0x0508),
    (0x050A, 0x050A), (0x050C, 0x050C), (0x050E, 0x050E), (0x0510, 0x0510),
    (0x0512, 0x0512), (0x0514, 0x0514), (0x0516, 0x0516), (0x0518, 0x0518),
    (0x051A, 0x051A), (0x051C, 0x051C), (0x051E, 0x051E), (0x0520, 0x0520),
    (0x0522, 0x0522), (0x0524, 0x0524), (0x0526, 0x0526), (0x0528, 0x0528),
    (0x052A, 0x052A), (0x052C, 0x052C), (0x052E, 0x052E), (0x0531, 0x0556),
    (0x10A0, 0x10C5), (0x10C7, 0x10C7), (0x10CD, 0x10CD), (0x13A0, 0x13F5),
    (0x1C90, 0x1CBA), (0x1CBD, 0x1CBF), (0x1E00, 0x1E00), (0x1E02, 0x1E02),
    (0x1E04, 0x1E04), (0x1E06, 0x1E06), (0x1E08, 0x1E08), (0x1E0A, 0x1E0A),
    (0x1E0C, 0x1E0C), (0x1E0E, 0x1E0E), (0x1E10, 0x1E10), (0x1E12, 0x1E12),
    (0x1E14, 0x1E14), (0x1E16, 0x1E16), (0x1E18, 0x1E18), (0x1E1A, 0x1E1A),
    (0x1E1C, 0x1E1C), (0x1E1E, 0x1E1E), (0x1E20, 0x1E20), (0x1E22, 0x1E22),
    (0x1E24, 0x1E24), (0x1E26, 0x1E26), (0x1E28, 0x1E28), (0x1E2A, 0x1E2A),
    (0x1E2C, 0x1E2C), (0x1E2E, 0x1E2E), (0x1E30, 0x1E30), (0x1E32, 0x1E32),
    (0x1E34, 0x1E34), (0x1E36, 0x1E36), (0x1E38, 0x1E38), (0x1E3A, 0x1E3A),
    (0x1E3C, 0x1E3C), (0x1E3E, 0x1E3E), (0x1E40, 0x1E40), (0x1E42, 0x1E42),
    (0x1E44, 0x1E44), (0x1E46, 0x1E46), (0x1E48, 0x1E48), (0x1E4A, 0x1E4A),
    (0x1E4C, 0x1E4C), (0x1E4E, 0x1E4E), (0x1E50, 0x1E50), (0x1E52, 0x1E52),
    (0x1E54, 0x1E54), (0x1E56, 0x1E56), (0x1E58, 0x1E58), (0x1E5A, 0x1E5A),
    (0x1E5C, 0x1E5C), (0x1E5E, 0x1E5E), (0x1E60, 0x1E60), (0x1E62, 0x1E62),
    (0x1E64, 0x1E64), (0x1E66, 0x1E66), (0x1E68, 0x1E68), (0x1E6A, 0x1E6A),
    (0x1E6C, 0x1E6C), (0x1E6E, 0x1E6E), (0x1E70, 0x1E70), (0x1E72, 0x1E72),
    (0x1E74, 0x1E74), (0x1E76, 0x1E76), (0x1E78, 0x1E78), (0x1E7A, 0x1E7A),
    (0x1E7C, 0x1E7C), (0x1E7E, 0x1E7E), (0x1E80, 0x1E80), (0x1E82, 0x1E82),
    (0x1E84, 0x1E84), (0x1E86, 0x1E86), (0x1E88, 0x1E88), (0x1E8A, 0x1E8A),
    (0x1E8C, 0x1E8C), (0x1E8E, 0x1E8E), (0x1E90, 0x1E90), (0x1E92, 0x1E92),
    (0x1E94, 0x1E94), (0x1E9E, 0x1E9E), (0x1EA0, 0x1EA0), (0x1EA2, 0x1EA2),
    (0x1EA4, 0x1EA4), (0x1EA6, 0x1EA6), (0x1EA8, 0x1EA8), (0x1EAA, 0x1EAA),
    (0x1EAC, 0x1EAC), (0x1EAE, 0x1EAE), (0x1EB0, 0x1EB0), (0x1EB2, 0x1EB2),
    (0x1EB4, 0x1EB4), (0x1EB6, 0x1EB6), (0x1EB8, 0x1EB8), (0x1EBA, 0x1EBA),
    (0x1EBC, 0x1EBC), (0x1EBE, 0x1EBE), (0x1EC0, 0x1EC0), (0x1EC2, 0x1EC2),
    (0x1EC4, 0x1EC4), (0x1EC6, 0x1EC6), (0x1EC8, 0x1EC8), (0x1ECA, 0x1ECA),
    (0x1ECC, 0x1ECC), (0x1ECE, 0x1ECE), (0x1ED0, 0x1ED0), (0x1ED2, 0x1ED2),
    (0x1ED4, 0x1ED4), (0x1ED6, 0x1ED6), (0x1ED8, 0x1ED8), (0x1EDA, 0x1EDA),
    (0x1EDC, 0x1EDC), (0x1EDE, 0x1EDE), (0x1EE0, 0x1EE0), (0x1EE2, 0x1EE2),
    (0x1EE4, 0x1EE4), (0x1EE6, 0x1EE6), (0x1EE8, 0x1EE8), (0x1EEA, 0x1EEA),
    (0x1EEC, 0x1EEC), (0x1EEE, 0x1EEE), (0x1EF0, 0x1EF0), (0x1EF2, 0x1EF2),
    (0x1EF4, 0x1EF4), (0x1EF6, 0x1EF6), (0x1EF8, 0x1EF8), (0x1EFA, 0x1EFA),
    (0x1EFC, 0x1EFC), (0x1EFE, 0x1EFE), (0x1F08, 0x1F0F), (0x1F18, 0x1F1D),
    (0x1F28, 0x1F2F), (0x1F38, 0x1F3F), (0x1F48, 0x1F4D), (0x1F59, 0x1F59),
    (0x1F5B, 0x1F5B), (0x1F5D, 0x1F5D), (0x1F5F, 0x1F5F), (0x1F68, 0x1F6F),
    (0x1FB8, 0x1FBB), (0x1FC8, 0x1FCB), (0x1FD8, 0x1FDB), (0x1FE8, 0x1FEC),
    (0x1FF8, 0x1FFB), (0x2102, 0x2102), (0x2107, 0x2107), (0x210B, 0x210D),
    (0x2110, 0x2112), (0x2115, 0x2115), (0x2119, 0x211D), (0x2124, 0x2124),
    (0x2126, 0x2126), (0x2128, 0x2128), (0x212A, 0x212D), (0x2130, 0x2133),
    (0x213E, 0x213F), (0x2145, 0x2145), (0x2160, 0x216F), (0x2183, 0x2183),
    (0x24B6, 0x24CF), (0x2C00, 0x2C2F), (0x2C60, 0x2C60), (0x2C62, 0x2C64),
    (0x2C67, 0x2C67), (0x2C69, 0x2C69), (0x2C6B, 0x2C6B), (0x2C6D, 0x2C70),
    (0x2C72, 0x2C72), (0x2C75, 0x2C75), (0x2C7E, 0x2C80), (0x2C82, 0x2C82),
    (0x2C84, 0x2C84), (0x2C86, 0x2C86), (0x2C88, 0x2C88), (0x2C8A, 0x2C8A),
    (0x2C8C, 0x2C8C), (0x2C8E, 0x2C8E), (0x2C90, 0x2C90), (0x2C92, 0x2C92),
    (0x2C94, 0x2C94), (0x2C96, 0x2C96), (0x2C98, 0x2C98), (0x2C9A, 0x2C9A),
    (0x2C9C, 0x2C9C), (0x2C9E, 0x2C9E), (0x2CA0, 0x2CA0), (0x2CA2, 0x2CA2),
    (0x2CA4, 0x2CA4), (0x2CA6, 0x2CA6), (0x2CA8, 0x2CA8), (0x2CAA, 0x2CAA),
    (0x2CAC, 0x2CAC), (0x2CAE, 0x2CAE), (0x2CB0, 0x2CB0), (0x2CB2, 0x2CB2),
    (0x2CB4, 0x2CB4), (0x2CB6, 0x2CB6), (0x2CB8, 0x2CB8), (0x2CBA, 0x2CBA),
    (0x2CBC, 0x2CBC), (0x2CBE, 0x2CBE), (0x2CC0, 0x2CC0), (0x2CC2, 0x2CC2),
    (0x2CC4, 0x2CC4), (0x2CC6, 0x2CC6), (0x2CC8, 0x2CC8), (0x2CCA, 0x2CCA),
    (0x2CCC, 0x2CCC), (0x2CCE, 0x2CCE), (0x2CD0, 0x2CD0), (0x2CD2, 0x2CD2),
    (0x2CD4, 0x2CD4), (0x2CD6, 0x2CD6), (0x2CD8, 0x2CD8), (0x2CDA, 0x2CDA),
    (0x2CDC, 0x2CDC), (0x2CDE, 0x2CDE), (0x2CE0, 0x2CE0), (0x2CE2, 0x2CE2),
    (0x2CEB, 0x2CEB), (0x2CED, 0x2CED), (0x2CF2, 0x2CF2), (0xA640, 0xA640),
    (0xA642, 0xA642), (0xA644, 0xA644), (0xA646, 0xA646), (0xA648, 0xA648),
    (0xA64A, 0xA64A), (0xA64C, 0xA64C), (0xA64E, 0xA64E), (0xA650, 0xA650),
    (0xA652, 0xA652), (0xA654, 0xA654), (0xA656, 0xA656), (0xA658, 0xA658),
    (0xA65A, 0xA65A), (0xA65C, 0xA65C), (0xA65E, 0xA65E), (0xA660, 0xA660),
    (0xA662, 0xA662), (0xA664, 0xA664), (0xA666, 0xA666), (0xA668, 0xA668),
    (0xA66A, 0xA66A), (0xA66C, 0xA66C), (0xA680, 0xA680), (0xA682, 0xA682),
    (0xA684, 0xA684), (0xA686, 0xA686), (0xA688, 0xA688), (0xA68A, 0xA68A),
    (0xA68C, 0xA68C), (0xA68E, 0xA68E), (0xA690, 0xA690), (0xA692, 0xA692),
    (0xA694, 0xA694), (0xA696, 0xA696), (0xA698, 0xA698), (0xA69A, 0xA69A),
    (0xA722, 0xA722), (0xA724, 0xA724), (0xA726, 0xA726), (0xA728, 0xA728),
    (0xA72A, 0xA72A), (0xA72C, 0xA72C), (0xA72E, 0xA72E), (0xA732, 0xA732),
    (0xA734, 0xA734), (0xA736, 0xA736), (0xA738, 0xA738), (0xA73A, 0xA73A),
    (0xA73C, 0xA73C), (0xA73E, 0xA73E), (0xA740, 0xA740), (0xA742, 0xA742),
    (0xA744, 0xA744), (0xA746, 0xA746), (0xA748, 0xA748), (0xA74A, 0xA74A),
    (0xA74C, 0xA74C), (0xA74E, 0xA74E), (0xA750, 0xA750), (0xA752, 0xA752),
    (0xA754, 0xA754), (0xA756, 0xA756), (0xA758, 0xA758), (0xA75A, 0xA75A),
    (0xA75C, 0xA75C), (0xA75E, 0xA75E), (0xA760, 0xA760), (0xA762, 0xA762),
    (0xA764, 0xA764), (0xA766, 0xA766), (0xA768, 0xA768), (0xA76A, 0xA76A),
    (0xA76C, 0xA76C), (0xA76E, 0xA76E), (0xA779, 0xA779), (0xA77B, 0xA77B),
    (0xA77D, 0xA77E), (0xA780, 0xA780), (0xA782, 0xA782), (0xA784, 0xA784),
    (0xA786, 0xA786), (0xA78B, 0xA78B), (0xA78D, 0xA78D), (0xA790, 0xA790),
    (0xA792, 0xA792), (0xA796, 0xA796), (0xA798, 0xA798), (0xA79A, 0xA79A),
    (0xA79C, 0xA79C), (0xA79E, 0xA79E), (0xA7A0, 0xA7A0), (0xA7A2, 0xA7A2),
    (0xA7A4, 0xA7A4), (0xA7A6, 0xA7A6), (0xA7A8, 0xA7A8), (0xA7AA, 0xA7AE),
    (0xA7B0, 0xA7B4), (0xA7B6, 0xA7B6), (0xA7B8, 0xA7B8), (0xA7BA, 0xA7BA),
    (0xA7BC, 0xA7BC), (0xA7BE, 0xA7BE), (0xA7C0, 0xA7C0), (0xA7C2, 0xA7C2),
    (0xA7C4, 0xA7C7), (0xA7C9, 0xA7C9), (0xA7D0, 0xA7D0), (0xA7D6, 0xA7D6),
    (0xA7D8, 0xA7D8), (0xA7F5, 0xA7F5), (0xFF21, 0xFF3A), (0x10400, 0x10427),
    (0x104B0, 0x104D3), (0x10570, 0x1057A), (0x1057C, 0x1058A), (0x1058C, 0x10592),
    (0x10594, 0x10595), (0x10C80, 0x10CB2), (0x118A0, 0x118BF), (0x16E40, 0x16E5F),
    (0x1D400, 0x1D419), (0x1D434, 0x1D44D), (0x1D468, 0x1D481), (0x1D49C, 0x1D49C),
    (0x1D49E, 0x1D49F), (0x1D4A2, 0x1D4A2), (0x1D4A5, 0x1D4A6), (0x1D4A9, 0x1D4AC),
    (0x1D4AE, 0x1D4B5), (0x1D4D0, 0x1D4E9), (0x1D504, 0x1D505), (0x1D507, 0x1D50A),
    (0x1D50D, 0x1D514), (0x1D516, 0x1D51C), (0x1D538, 0x1D539), (0x1D53B, 0x1D53E),
    (0x1D540, 0x1D544), (0x1D546, 0x1D546), (0x1D54A, 0x1D550), (0x1D56C, 0x1D585),
    (0x1D5A0, 0x1D5B9), (0x1D5D4, 0x1D5ED), (0x1D608, 0x1D621), (0x1D63C, 0x1D655),
    (0x1D670, 0x1D689), (0x1D6A8, 0x1D6C0), (0x1D6E2, 0x1D6FA), (0x1D71C, 0x1D734),
    (0x1D756, 0x1D76E), (0x1D790, 0x1D7A8), (0x1D7CA, 0x1D7CA), (0x1E900, 0x1E921),
    (0x1F130, 0x1F149), (0x1F150, 0x1F169), (0x1F170, 0x1F189),
];

pub(crate) static WHITE_SPACE_TABLE: &[(u32, u32)] = &[
    (0x0009, 0x000D), (0x0020, 0x0020), (0x0085, 0x0085), (0x00A0, 0x00A0),
    (0x1680, 0x1680), (0x2000, 0x200A), (0x2028, 0x2029), (0x202F, 0x202F),
    (0x205F, 0x205F), (0x3000, 0x3000),
];

pub(crate) static MATH_TABLE: &[(u32, u32)] = &[
    (0x002B, 0x002B), (0x003C, 0x003E), (0x005E, 0x005E), (0x007C, 0x007C),
    (0x007E, 0x007E), (0x00AC, 0x00AC), (0x00B1, 0x00B1), (0x00D7, 0x00D7),
    (0x00F7, 0x00F7), (0x03D0, 0x03D2), (0x03D5, 0x03D5), (0x03F0, 0x03F1),
    (0x03F4, 0x03F6), (0x0606, 0x0608), (0x2016, 0x2016), (0x2032, 0x2034),
    (0x2040, 0x2040), (0x2044, 0x2044), (0x2052, 0x2052), (0x2061, 0x2064),
    (0x207A, 0x207E), (0x208A, 0x208E), (0x20D0, 0x20DC), (0x20E1, 0x20E1),
    (0x20E5, 0x20E6), (0x20EB, 0x20EF), (0x2102, 0x2102), (0x2107, 0x2107),
    (0x210A, 0x2113), (0x2115, 0x2115), (0x2118, 0x211D), (0x2124, 0x2124),
    (0x2128, 0x2129), (0x212C, 0x212D), (0x212F, 0x2131), (0x2133, 0x2138),
    (0x213C, 0x2149), (0x214B, 0x214B), (0x2190, 0x21A7), (0x21A9, 0x21AE),
    (0x21B0, 0x21B1), (0x21B6, 0x21B7), (0x21BC, 0x21DB), (0x21DD, 0x21DD),
    (0x21E4, 0x21E5), (0x21F4, 0x22FF), (0x2308, 0x230B), (0x2320, 0x2321),
    (0x237C, 0x237C), (0x239B, 0x23B5), (0x23B7, 0x23B7), (0x23D0, 0x23D0),
    (0x23DC, 0x23E2), (0x25A0, 0x25A1), (0x25AE, 0x25B7), (0x25BC, 0x25C1),
    (0x25C6, 0x25C7), (0x25CA, 0x25CB), (0x25CF, 0x25D3), (0x25E2, 0x25E2),
    (0x25E4, 0x25E4), (0x25E7, 0x25EC), (0x25F8, 0x25FF), (0x2605, 0x2606),
    (0x2640, 0x2640), (0x2642, 0x2642), (0x2660, 0x2663), (0x266D, 0x266F),
    (0x27C0, 0x27FF), (0x2900, 0x2AFF), (0x2B30, 0x2B44), (0x2B47, 0x2B4C),
    (0xFB29, 0xFB29), (0xFE61, 0xFE66), (0xFE68, 0xFE68), (0xFF0B, 0xFF0B),
    (0xFF1C, 0xFF1E), (0xFF3C, 0xFF3C), (0xFF3E, 0xFF3E), (0xFF5C, 0xFF5C),
    (0xFF5E, 0xFF5E), (0xFFE2, 0xFFE2), (0xFFE9, 0xFFEC), (0x1D400, 0x1D454),
    (0x1D456, 0x1D49C), (0x1D49E, 0x1D49F), (0x1D4A2, 0x1D4A2), (0x1D4A5, 0x1D4A6),
    (0x1D4A9, 0x1D4AC), (0x1D4AE, 0x1D4B9), (0x1D4BB, 0x1D4BB), (0x1D4BD, 0x1D4C3),
    (0x1D4C5, 0x1D505), (0x1D507, 0x1D50A), (0x1D50D, 0x1D514), (0x1D516, 0x1D51C),
    (0x1D51E, 0x1D539), (0x1D53B, 0x1D53E), (0x1D540, 0x1D544), (0x1D546, 0x1D546),
    (0x1D54A, 0x1D550), (0x1D552, 0x1D6A5), (0x1D6A8, 0x1D7CB), (0x1D7CE, 0x1D7FF),
    (0x1EE00, 0x1EE03), (0x1EE05, 0x1EE1F), (0x1EE21, 0x1EE22), (0x1EE24, 0x1EE24),
    (0x1EE27, 0x1EE27), (0x1EE29, 0x1EE32), (0x1EE34, 0x1EE37), (0x1EE39, 0x1EE39),
    (0x1EE3B, 0x1EE3B), (0x1EE42, 0x1EE42), (0x1EE47, 0x1EE47), (0x1EE49, 0x1EE49),
    (0x1EE4B, 0x1EE4B), (0x1EE4D, 0x1EE4F), (0x1EE51, 0x1EE52), (0x1EE54, 0x1EE54),
    (0x1EE57, 0x1EE57), (0x1EE59, 0x1EE59), (0x1EE5B, 0x1EE5B), (0x1EE5D, 0x1EE5D),
    (0x1EE5F, 0x1EE5F), (0x1EE61, 0x1EE62), (0x1EE64, 0x1EE64), (0x1EE67, 0x1EE6A),
    (0x1EE6C, 0x1EE72), (0x1EE74, 0x1EE77), (0x1EE79, 0x1EE7C), (0x1EE7E, 0x1EE7E),
    (0x1EE80, 0x1EE89), (0x1EE8B, 0x1EE9B), (0x1EEA1, 0x1EEA3), (0x1EEA5, 0x1EEA9),
    (0x1EEAB, 0x1EEBB), (0x1EEF0, 0x1EEF1),
];

pub(crate) static HEX_DIGIT_TABLE: &[(u32, u32)] = &[
    (0x0030, 0x0039), (0x0041, 0x0046), (0x0061, 0x0066), (0xFF10, 0xFF19),
    (0xFF21, 0xFF26), (0xFF41, 0xFF46),
];

pub(crate) static IDEOGRAPHIC_TABLE: &[(u32, u32)] = &[
    (0x3006, 0x3007), (0x3021, 0x3029), (0x3038, 0x303A), (0x3400, 0x4DBF),
    (0x4E00, 0x9FFF), (0xF900, 0xFA6D), (0xFA70, 0xFAD9), (0x16FE4, 0x16FE4),
    (0x17000, 0x187F7), (0x18800, 0x18CD5), (0x18D00, 0x18D08), (0x1B170, 0x1B2FB),
    (0x20000, 0x2A6DF), (0x2A700, 0x2B738), (0x2B740, 0x2B81D), (0x2B820, 0x2CEA1),
    (0x2CEB0, 0x2EBE0), (0x2F800, 0x2FA1D), (0x30000, 0x3134A),
];
