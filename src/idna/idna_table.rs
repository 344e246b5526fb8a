// Generated by tools/idna-data.py from the IDNA2008 and UTS #46
// data for Unicode 17.0.0. Do not edit.

/// The version of the classification data.
pub const TABLE_VERSION: &str = "RFC 5892 / Unicode 17.0.0";

/// The derived property of all code points that aren’t disallowed.
static DERIVED: &[(u32, u32, Derived)] = &[
    (0x002D, 0x002D, Derived::Valid),
    (0x0030, 0x0039, Derived::Valid),
    (0x0041, 0x005A, Derived::Mapped),
    (0x0061, 0x007A, Derived::Valid),
    (0x00A0, 0x00A0, Derived::Mapped),
    (0x00A8, 0x00A8, Derived::Mapped),
    (0x00AA, 0x00AA, Derived::Mapped),
    (0x00AD, 0x00AD, Derived::Ignored),
    (0x00AF, 0x00AF, Derived::Mapped),
    (0x00B2, 0x00B5, Derived::Mapped),
    (0x00B7, 0x00B7, Derived::Contextual),
    (0x00B8, 0x00BA, Derived::Mapped),
    (0x00BC, 0x00BE, Derived::Mapped),
    (0x00C0, 0x00D6, Derived::Mapped),
    (0x00D8, 0x00DE, Derived::Mapped),
    (0x00DF, 0x00F6, Derived::Valid),
    (0x00F8, 0x00FF, Derived::Valid),
    (0x0100, 0x0100, Derived::Mapped),
    (0x0101, 0x0101, Derived::Valid),
    (0x0102, 0x0102, Derived::Mapped),
    (0x0103, 0x0103, Derived::Valid),
    (0x0104, 0x0104, Derived::Mapped),
    (0x0105, 0x0105, Derived::Valid),
    (0x0106, 0x0106, Derived::Mapped),
    (0x0107, 0x0107, Derived::Valid),
    (0x0108, 0x0108, Derived::Mapped),
    (0x0109, 0x0109, Derived::Valid),
    (0x010A, 0x010A, Derived::Mapped),
    (0x010B, 0x010B, Derived::Valid),
    (0x010C, 0x010C, Derived::Mapped),
    (0x010D, 0x010D, Derived::Valid),
    (0x010E, 0x010E, Derived::Mapped),
    (0x010F, 0x010F, Derived::Valid),
    (0x0110, 0x0110, Derived::Mapped),
    (0x0111, 0x0111, Derived::Valid),
    (0x0112, 0x0112, Derived::Mapped),
    (0x0113, 0x0113, Derived::Valid),
    (0x0114, 0x0114, Derived::Mapped),
    (0x0115, 0x0115, Derived::Valid),
    (0x0116, 0x0116, Derived::Mapped),
    (0x0117, 0x0117, Derived::Valid),
    (0x0118, 0x0118, Derived::Mapped),
    (0x0119, 0x0119, Derived::Valid),
    (0x011A, 0x011A, Derived::Mapped),
    (0x011B, 0x011B, Derived::Valid),
    (0x011C, 0x011C, Derived::Mapped),
    (0x011D, 0x011D, Derived::Valid),
    (0x011E, 0x011E, Derived::Mapped),
    (0x011F, 0x011F, Derived::Valid),
    (0x0120, 0x0120, Derived::Mapped),
    (0x0121, 0x0121, Derived::Valid),
    (0x0122, 0x0122, Derived::Mapped),
    (0x0123, 0x0123, Derived::Valid),
    (0x0124, 0x0124, Derived::Mapped),
    (0x0125, 0x0125, Derived::Valid),
    (0x0126, 0x0126, Derived::Mapped),
    (0x0127, 0x0127, Derived::Valid),
    (0x0128, 0x0128, Derived::Mapped),
    (0x0129, 0x0129, Derived::Valid),
    (0x012A, 0x012A, Derived::Mapped),
    (0x012B, 0x012B, Derived::Valid),
    (0x012C, 0x012C, Derived::Mapped),
    (0x012D, 0x012D, Derived::Valid),
    (0x012E, 0x012E, Derived::Mapped),
    (0x012F, 0x012F, Derived::Valid),
    (0x0130, 0x0130, Derived::Mapped),
    (0x0131, 0x0131, Derived::Valid),
    (0x0132, 0x0134, Derived::Mapped),
    (0x0135, 0x0135, Derived::Valid),
    (0x0136, 0x0136, Derived::Mapped),
    (0x0137, 0x0138, Derived::Valid),
    (0x0139, 0x0139, Derived::Mapped),
    (0x013A, 0x013A, Derived::Valid),
    (0x013B, 0x013B, Derived::Mapped),
    (0x013C, 0x013C, Derived::Valid),
    (0x013D, 0x013D, Derived::Mapped),
    (0x013E, 0x013E, Derived::Valid),
    (0x013F, 0x0141, Derived::Mapped),
    (0x0142, 0x0142, Derived::Valid),
    (0x0143, 0x0143, Derived::Mapped),
    (0x0144, 0x0144, Derived::Valid),
    (0x0145, 0x0145, Derived::Mapped),
    (0x0146, 0x0146, Derived::Valid),
    (0x0147, 0x0147, Derived::Mapped),
    (0x0148, 0x0148, Derived::Valid),
    (0x0149, 0x014A, Derived::Mapped),
    (0x014B, 0x014B, Derived::Valid),
    (0x014C, 0x014C, Derived::Mapped),
    (0x014D, 0x014D, Derived::Valid),
    (0x014E, 0x014E, Derived::Mapped),
    (0x014F, 0x014F, Derived::Valid),
    (0x0150, 0x0150, Derived::Mapped),
    (0x0151, 0x0151, Derived::Valid),
    (0x0152, 0x0152, Derived::Mapped),
    (0x0153, 0x0153, Derived::Valid),
    (0x0154, 0x0154, Derived::Mapped),
    (0x0155, 0x0155, Derived::Valid),
    (0x0156, 0x0156, Derived::Mapped),
    (0x0157, 0x0157, Derived::Valid),
    (0x0158, 0x0158, Derived::Mapped),
    (0x0159, 0x0159, Derived::Valid),
    (0x015A, 0x015A, Derived::Mapped),
    (0x015B, 0x015B, Derived::Valid),
    (0x015C, 0x015C, Derived::Mapped),
    (0x015D, 0x015D, Derived::Valid),
    (0x015E, 0x015E, Derived::Mapped),
    (0x015F, 0x015F, Derived::Valid),
    (0x0160, 0x0160, Derived::Mapped),
    (0x0161, 0x0161, Derived::Valid),
    (0x0162, 0x0162, Derived::Mapped),
    (0x0163, 0x0163, Derived::Valid),
    (0x0164, 0x0164, Derived::Mapped),
    (0x0165, 0x0165, Derived::Valid),
    (0x0166, 0x0166, Derived::Mapped),
    (0x0167, 0x0167, Derived::Valid),
    (0x0168, 0x0168, Derived::Mapped),
    (0x0169, 0x0169, Derived::Valid),
    (0x016A, 0x016A, Derived::Mapped),
    (0x016B, 0x016B, Derived::Valid),
    (0x016C, 0x016C, Derived::Mapped),
    (0x016D, 0x016D, Derived::Valid),
    (0x016E, 0x016E, Derived::Mapped),
    (0x016F, 0x016F, Derived::Valid),
    (0x0170, 0x0170, Derived::Mapped),
    (0x0171, 0x0171, Derived::Valid),
    (0x0172, 0x0172, Derived::Mapped),
    (0x0173, 0x0173, Derived::Valid),
    (0x0174, 0x0174, Derived::Mapped),
    (0x0175, 0x0175, Derived::Valid),
    (0x0176, 0x0176, Derived::Mapped),
    (0x0177, 0x0177, Derived::Valid),
    (0x0178, 0x0179, Derived::Mapped),
    (0x017A, 0x017A, Derived::Valid),
    (0x017B, 0x017B, Derived::Mapped),
    (0x017C, 0x017C, Derived::Valid),
    (0x017D, 0x017D, Derived::Mapped),
    (0x017E, 0x017E, Derived::Valid),
    (0x017F, 0x017F, Derived::Mapped),
    (0x0180, 0x0180, Derived::Valid),
    (0x0181, 0x0182, Derived::Mapped),
    (0x0183, 0x0183, Derived::Valid),
    (0x0184, 0x0184, Derived::Mapped),
    (0x0185, 0x0185, Derived::Valid),
    (0x0186, 0x0187, Derived::Mapped),
    (0x0188, 0x0188, Derived::Valid),
    (0x0189, 0x018B, Derived::Mapped),
    (0x018C, 0x018D, Derived::Valid),
    (0x018E, 0x0191, Derived::Mapped),
    (0x0192, 0x0192, Derived::Valid),
    (0x0193, 0x0194, Derived::Mapped),
    (0x0195, 0x0195, Derived::Valid),
    (0x0196, 0x0198, Derived::Mapped),
    (0x0199, 0x019B, Derived::Valid),
    (0x019C, 0x019D, Derived::Mapped),
    (0x019E, 0x019E, Derived::Valid),
    (0x019F, 0x01A0, Derived::Mapped),
    (0x01A1, 0x01A1, Derived::Valid),
    (0x01A2, 0x01A2, Derived::Mapped),
    (0x01A3, 0x01A3, Derived::Valid),
    (0x01A4, 0x01A4, Derived::Mapped),
    (0x01A5, 0x01A5, Derived::Valid),
    (0x01A6, 0x01A7, Derived::Mapped),
    (0x01A8, 0x01A8, Derived::Valid),
    (0x01A9, 0x01A9, Derived::Mapped),
    (0x01AA, 0x01AB, Derived::Valid),
    (0x01AC, 0x01AC, Derived::Mapped),
    (0x01AD, 0x01AD, Derived::Valid),
    (0x01AE, 0x01AF, Derived::Mapped),
    (0x01B0, 0x01B0, Derived::Valid),
    (0x01B1, 0x01B3, Derived::Mapped),
    (0x01B4, 0x01B4, Derived::Valid),
    (0x01B5, 0x01B5, Derived::Mapped),
    (0x01B6, 0x01B6, Derived::Valid),
    (0x01B7, 0x01B8, Derived::Mapped),
    (0x01B9, 0x01BB, Derived::Valid),
    (0x01BC, 0x01BC, Derived::Mapped),
    (0x01BD, 0x01C3, Derived::Valid),
    (0x01C4, 0x01CD, Derived::Mapped),
    (0x01CE, 0x01CE, Derived::Valid),
    (0x01CF, 0x01CF, Derived::Mapped),
    (0x01D0, 0x01D0, Derived::Valid),
    (0x01D1, 0x01D1, Derived::Mapped),
    (0x01D2, 0x01D2, Derived::Valid),
    (0x01D3, 0x01D3, Derived::Mapped),
    (0x01D4, 0x01D4, Derived::Valid),
    (0x01D5, 0x01D5, Derived::Mapped),
    (0x01D6, 0x01D6, Derived::Valid),
    (0x01D7, 0x01D7, Derived::Mapped),
    (0x01D8, 0x01D8, Derived::Valid),
    (0x01D9, 0x01D9, Derived::Mapped),
    (0x01DA, 0x01DA, Derived::Valid),
    (0x01DB, 0x01DB, Derived::Mapped),
    (0x01DC, 0x01DD, Derived::Valid),
    (0x01DE, 0x01DE, Derived::Mapped),
    (0x01DF, 0x01DF, Derived::Valid),
    (0x01E0, 0x01E0, Derived::Mapped),
    (0x01E1, 0x01E1, Derived::Valid),
    (0x01E2, 0x01E2, Derived::Mapped),
    (0x01E3, 0x01E3, Derived::Valid),
    (0x01E4, 0x01E4, Derived::Mapped),
    (0x01E5, 0x01E5, Derived::Valid),
    (0x01E6, 0x01E6, Derived::Mapped),
    (0x01E7, 0x01E7, Derived::Valid),
    (0x01E8, 0x01E8, Derived::Mapped),
    (0x01E9, 0x01E9, Derived::Valid),
    (0x01EA, 0x01EA, Derived::Mapped),
    (0x01EB, 0x01EB, Derived::Valid),
    (0x01EC, 0x01EC, Derived::Mapped),
    (0x01ED, 0x01ED, Derived::Valid),
    (0x01EE, 0x01EE, Derived::Mapped),
    (0x01EF, 0x01F0, Derived::Valid),
    (0x01F1, 0x01F4, Derived::Mapped),
    (0x01F5, 0x01F5, Derived::Valid),
    (0x01F6, 0x01F8, Derived::Mapped),
    (0x01F9, 0x01F9, Derived::Valid),
    (0x01FA, 0x01FA, Derived::Mapped),
    (0x01FB, 0x01FB, Derived::Valid),
    (0x01FC, 0x01FC, Derived::Mapped),
    (0x01FD, 0x01FD, Derived::Valid),
    (0x01FE, 0x01FE, Derived::Mapped),
    (0x01FF, 0x01FF, Derived::Valid),
    (0x0200, 0x0200, Derived::Mapped),
    (0x0201, 0x0201, Derived::Valid),
    (0x0202, 0x0202, Derived::Mapped),
    (0x0203, 0x0203, Derived::Valid),
    (0x0204, 0x0204, Derived::Mapped),
    (0x0205, 0x0205, Derived::Valid),
    (0x0206, 0x0206, Derived::Mapped),
    (0x0207, 0x0207, Derived::Valid),
    (0x0208, 0x0208, Derived::Mapped),
    (0x0209, 0x0209, Derived::Valid),
    (0x020A, 0x020A, Derived::Mapped),
    (0x020B, 0x020B, Derived::Valid),
    (0x020C, 0x020C, Derived::Mapped),
    (0x020D, 0x020D, Derived::Valid),
    (0x020E, 0x020E, Derived::Mapped),
    (0x020F, 0x020F, Derived::Valid),
    (0x0210, 0x0210, Derived::Mapped),
    (0x0211, 0x0211, Derived::Valid),
    (0x0212, 0x0212, Derived::Mapped),
    (0x0213, 0x0213, Derived::Valid),
    (0x0214, 0x0214, Derived::Mapped),
    (0x0215, 0x0215, Derived::Valid),
    (0x0216, 0x0216, Derived::Mapped),
    (0x0217, 0x0217, Derived::Valid),
    (0x0218, 0x0218, Derived::Mapped),
    (0x0219, 0x0219, Derived::Valid),
    (0x021A, 0x021A, Derived::Mapped),
    (0x021B, 0x021B, Derived::Valid),
    (0x021C, 0x021C, Derived::Mapped),
    (0x021D, 0x021D, Derived::Valid),
    (0x021E, 0x021E, Derived::Mapped),
    (0x021F, 0x021F, Derived::Valid),
    (0x0220, 0x0220, Derived::Mapped),
    (0x0221, 0x0221, Derived::Valid),
    (0x0222, 0x0222, Derived::Mapped),
    (0x0223, 0x0223, Derived::Valid),
    (0x0224, 0x0224, Derived::Mapped),
    (0x0225, 0x0225, Derived::Valid),
    (0x0226, 0x0226, Derived::Mapped),
    (0x0227, 0x0227, Derived::Valid),
    (0x0228, 0x0228, Derived::Mapped),
    (0x0229, 0x0229, Derived::Valid),
    (0x022A, 0x022A, Derived::Mapped),
    (0x022B, 0x022B, Derived::Valid),
    (0x022C, 0x022C, Derived::Mapped),
    (0x022D, 0x022D, Derived::Valid),
    (0x022E, 0x022E, Derived::Mapped),
    (0x022F, 0x022F, Derived::Valid),
    (0x0230, 0x0230, Derived::Mapped),
    (0x0231, 0x0231, Derived::Valid),
    (0x0232, 0x0232, Derived::Mapped),
    (0x0233, 0x0239, Derived::Valid),
    (0x023A, 0x023B, Derived::Mapped),
    (0x023C, 0x023C, Derived::Valid),
    (0x023D, 0x023E, Derived::Mapped),
    (0x023F, 0x0240, Derived::Valid),
    (0x0241, 0x0241, Derived::Mapped),
    (0x0242, 0x0242, Derived::Valid),
    (0x0243, 0x0246, Derived::Mapped),
    (0x0247, 0x0247, Derived::Valid),
    (0x0248, 0x0248, Derived::Mapped),
    (0x0249, 0x0249, Derived::Valid),
    (0x024A, 0x024A, Derived::Mapped),
    (0x024B, 0x024B, Derived::Valid),
    (0x024C, 0x024C, Derived::Mapped),
    (0x024D, 0x024D, Derived::Valid),
    (0x024E, 0x024E, Derived::Mapped),
    (0x024F, 0x02AF, Derived::Valid),
    (0x02B0, 0x02B8, Derived::Mapped),
    (0x02B9, 0x02C1, Derived::Valid),
    (0x02C6, 0x02D1, Derived::Valid),
    (0x02D8, 0x02DD, Derived::Mapped),
    (0x02E0, 0x02E4, Derived::Mapped),
    (0x02EC, 0x02EC, Derived::Valid),
    (0x02EE, 0x02EE, Derived::Valid),
    (0x0300, 0x033F, Derived::Valid),
    (0x0340, 0x0341, Derived::Mapped),
    (0x0342, 0x0342, Derived::Valid),
    (0x0343, 0x0345, Derived::Mapped),
    (0x0346, 0x034E, Derived::Valid),
    (0x034F, 0x034F, Derived::Ignored),
    (0x0350, 0x036F, Derived::Valid),
    (0x0370, 0x0370, Derived::Mapped),
    (0x0371, 0x0371, Derived::Valid),
    (0x0372, 0x0372, Derived::Mapped),
    (0x0373, 0x0373, Derived::Valid),
    (0x0374, 0x0374, Derived::Mapped),
    (0x0375, 0x0375, Derived::Contextual),
    (0x0376, 0x0376, Derived::Mapped),
    (0x0377, 0x0377, Derived::Valid),
    (0x037A, 0x037A, Derived::Mapped),
    (0x037B, 0x037D, Derived::Valid),
    (0x037E, 0x037F, Derived::Mapped),
    (0x0384, 0x038A, Derived::Mapped),
    (0x038C, 0x038C, Derived::Mapped),
    (0x038E, 0x038F, Derived::Mapped),
    (0x0390, 0x0390, Derived::Valid),
    (0x0391, 0x03A1, Derived::Mapped),
    (0x03A3, 0x03AB, Derived::Mapped),
    (0x03AC, 0x03CE, Derived::Valid),
    (0x03CF, 0x03D6, Derived::Mapped),
    (0x03D7, 0x03D7, Derived::Valid),
    (0x03D8, 0x03D8, Derived::Mapped),
    (0x03D9, 0x03D9, Derived::Valid),
    (0x03DA, 0x03DA, Derived::Mapped),
    (0x03DB, 0x03DB, Derived::Valid),
    (0x03DC, 0x03DC, Derived::Mapped),
    (0x03DD, 0x03DD, Derived::Valid),
    (0x03DE, 0x03DE, Derived::Mapped),
    (0x03DF, 0x03DF, Derived::Valid),
    (0x03E0, 0x03E0, Derived::Mapped),
    (0x03E1, 0x03E1, Derived::Valid),
    (0x03E2, 0x03E2, Derived::Mapped),
    (0x03E3, 0x03E3, Derived::Valid),
    (0x03E4, 0x03E4, Derived::Mapped),
    (0x03E5, 0x03E5, Derived::Valid),
    (0x03E6, 0x03E6, Derived::Mapped),
    (0x03E7, 0x03E7, Derived::Valid),
    (0x03E8, 0x03E8, Derived::Mapped),
    (0x03E9, 0x03E9, Derived::Valid),
    (0x03EA, 0x03EA, Derived::Mapped),
    (0x03EB, 0x03EB, Derived::Valid),
    (0x03EC, 0x03EC, Derived::Mapped),
    (0x03ED, 0x03ED, Derived::Valid),
    (0x03EE, 0x03EE, Derived::Mapped),
    (0x03EF, 0x03EF, Derived::Valid),
    (0x03F0, 0x03F2, Derived::Mapped),
    (0x03F3, 0x03F3, Derived::Valid),
    (0x03F4, 0x03F5, Derived::Mapped),
    (0x03F7, 0x03F7, Derived::Mapped),
    (0x03F8, 0x03F8, Derived::Valid),
    (0x03F9, 0x03FA, Derived::Mapped),
    (0x03FB, 0x03FC, Derived::Valid),
    (0x03FD, 0x042F, Derived::Mapped),
    (0x0430, 0x045F, Derived::Valid),
    (0x0460, 0x0460, Derived::Mapped),
    (0x0461, 0x0461, Derived::Valid),
    (0x0462, 0x0462, Derived::Mapped),
    (0x0463, 0x0463, Derived::Valid),
    (0x0464, 0x0464, Derived::Mapped),
    (0x0465, 0x0465, Derived::Valid),
    (0x0466, 0x0466, Derived::Mapped),
    (0x0467, 0x0467, Derived::Valid),
    (0x0468, 0x0468, Derived::Mapped),
    (0x0469, 0x0469, Derived::Valid),
    (0x046A, 0x046A, Derived::Mapped),
    (0x046B, 0x046B, Derived::Valid),
    (0x046C, 0x046C, Derived::Mapped),
    (0x046D, 0x046D, Derived::Valid),
    (0x046E, 0x046E, Derived::Mapped),
    (0x046F, 0x046F, Derived::Valid),
    (0x0470, 0x0470, Derived::Mapped),
    (0x0471, 0x0471, Derived::Valid),
    (0x0472, 0x0472, Derived::Mapped),
    (0x0473, 0x0473, Derived::Valid),
    (0x0474, 0x0474, Derived::Mapped),
    (0x0475, 0x0475, Derived::Valid),
    (0x0476, 0x0476, Derived::Mapped),
    (0x0477, 0x0477, Derived::Valid),
    (0x0478, 0x0478, Derived::Mapped),
    (0x0479, 0x0479, Derived::Valid),
    (0x047A, 0x047A, Derived::Mapped),
    (0x047B, 0x047B, Derived::Valid),
    (0x047C, 0x047C, Derived::Mapped),
    (0x047D, 0x047D, Derived::Valid),
    (0x047E, 0x047E, Derived::Mapped),
    (0x047F, 0x047F, Derived::Valid),
    (0x0480, 0x0480, Derived::Mapped),
    (0x0481, 0x0481, Derived::Valid),
    (0x0483, 0x0487, Derived::Valid),
    (0x048A, 0x048A, Derived::Mapped),
    (0x048B, 0x048B, Derived::Valid),
    (0x048C, 0x048C, Derived::Mapped),
    (0x048D, 0x048D, Derived::Valid),
    (0x048E, 0x048E, Derived::Mapped),
    (0x048F, 0x048F, Derived::Valid),
    (0x0490, 0x0490, Derived::Mapped),
    (0x0491, 0x0491, Derived::Valid),
    (0x0492, 0x0492, Derived::Mapped),
    (0x0493, 0x0493, Derived::Valid),
    (0x0494, 0x0494, Derived::Mapped),
    (0x0495, 0x0495, Derived::Valid),
    (0x0496, 0x0496, Derived::Mapped),
    (0x0497, 0x0497, Derived::Valid),
    (0x0498, 0x0498, Derived::Mapped),
    (0x0499, 0x0499, Derived::Valid),
    (0x049A, 0x049A, Derived::Mapped),
    (0x049B, 0x049B, Derived::Valid),
    (0x049C, 0x049C, Derived::Mapped),
    (0x049D, 0x049D, Derived::Valid),
    (0x049E, 0x049E, Derived::Mapped),
    (0x049F, 0x049F, Derived::Valid),
    (0x04A0, 0x04A0, Derived::Mapped),
    (0x04A1, 0x04A1, Derived::Valid),
    (0x04A2, 0x04A2, Derived::Mapped),
    (0x04A3, 0x04A3, Derived::Valid),
    (0x04A4, 0x04A4, Derived::Mapped),
    (0x04A5, 0x04A5, Derived::Valid),
    (0x04A6, 0x04A6, Derived::Mapped),
    (0x04A7, 0x04A7, Derived::Valid),
    (0x04A8, 0x04A8, Derived::Mapped),
    (0x04A9, 0x04A9, Derived::Valid),
    (0x04AA, 0x04AA, Derived::Mapped),
    (0x04AB, 0x04AB, Derived::Valid),
    (0x04AC, 0x04AC, Derived::Mapped),
    (0x04AD, 0x04AD, Derived::Valid),
    (0x04AE, 0x04AE, Derived::Mapped),
    (0x04AF, 0x04AF, Derived::Valid),
    (0x04B0, 0x04B0, Derived::Mapped),
    (0x04B1, 0x04B1, Derived::Valid),
    (0x04B2, 0x04B2, Derived::Mapped),
    (0x04B3, 0x04B3, Derived::Valid),
    (0x04B4, 0x04B4, Derived::Mapped),
    (0x04B5, 0x04B5, Derived::Valid),
    (0x04B6, 0x04B6, Derived::Mapped),
    (0x04B7, 0x04B7, Derived::Valid),
    (0x04B8, 0x04B8, Derived::Mapped),
    (0x04B9, 0x04B9, Derived::Valid),
    (0x04BA, 0x04BA, Derived::Mapped),
    (0x04BB, 0x04BB, Derived::Valid),
    (0x04BC, 0x04BC, Derived::Mapped),
    (0x04BD, 0x04BD, Derived::Valid),
    (0x04BE, 0x04BE, Derived::Mapped),
    (0x04BF, 0x04BF, Derived::Valid),
    (0x04C0, 0x04C1, Derived::Mapped),
    (0x04C2, 0x04C2, Derived::Valid),
    (0x04C3, 0x04C3, Derived::Mapped),
    (0x04C4, 0x04C4, Derived::Valid),
    (0x04C5, 0x04C5, Derived::Mapped),
    (0x04C6, 0x04C6, Derived::Valid),
    (0x04C7, 0x04C7, Derived::Mapped),
    (0x04C8, 0x04C8, Derived::Valid),
    (0x04C9, 0x04C9, Derived::Mapped),
    (0x04CA, 0x04CA, Derived::Valid),
    (0x04CB, 0x04CB, Derived::Mapped),
    (0x04CC, 0x04CC, Derived::Valid),
    (0x04CD, 0x04CD, Derived::Mapped),
    (0x04CE, 0x04CF, Derived::Valid),
    (0x04D0, 0x04D0, Derived::Mapped),
    (0x04D1, 0x04D1, Derived::Valid),
    (0x04D2, 0x04D2, Derived::Mapped),
    (0x04D3, 0x04D3, Derived::Valid),
    (0x04D4, 0x04D4, Derived::Mapped),
    (0x04D5, 0x04D5, Derived::Valid),
    (0x04D6, 0x04D6, Derived::Mapped),
    (0x04D7, 0x04D7, Derived::Valid),
    (0x04D8, 0x04D8, Derived::Mapped),
    (0x04D9, 0x04D9, Derived::Valid),
    (0x04DA, 0x04DA, Derived::Mapped),
    (0x04DB, 0x04DB, Derived::Valid),
    (0x04DC, 0x04DC, Derived::Mapped),
    (0x04DD, 0x04DD, Derived::Valid),
    (0x04DE, 0x04DE, Derived::Mapped),
    (0x04DF, 0x04DF, Derived::Valid),
    (0x04E0, 0x04E0, Derived::Mapped),
    (0x04E1, 0x04E1, Derived::Valid),
    (0x04E2, 0x04E2, Derived::Mapped),
    (0x04E3, 0x04E3, Derived::Valid),
    (0x04E4, 0x04E4, Derived::Mapped),
    (0x04E5, 0x04E5, Derived::Valid),
    (0x04E6, 0x04E6, Derived::Mapped),
    (0x04E7, 0x04E7, Derived::Valid),
    (0x04E8, 0x04E8, Derived::Mapped),
    (0x04E9, 0x04E9, Derived::Valid),
    (0x04EA, 0x04EA, Derived::Mapped),
    (0x04EB, 0x04EB, Derived::Valid),
    (0x04EC, 0x04EC, Derived::Mapped),
    (0x04ED, 0x04ED, Derived::Valid),
    (0x04EE, 0x04EE, Derived::Mapped),
    (0x04EF, 0x04EF, Derived::Valid),
    (0x04F0, 0x04F0, Derived::Mapped),
    (0x04F1, 0x04F1, Derived::Valid),
    (0x04F2, 0x04F2, Derived::Mapped),
    (0x04F3, 0x04F3, Derived::Valid),
    (0x04F4, 0x04F4, Derived::Mapped),
    (0x04F5, 0x04F5, Derived::Valid),
    (0x04F6, 0x04F6, Derived::Mapped),
    (0x04F7, 0x04F7, Derived::Valid),
    (0x04F8, 0x04F8, Derived::Mapped),
    (0x04F9, 0x04F9, Derived::Valid),
    (0x04FA, 0x04FA, Derived::Mapped),
    (0x04FB, 0x04FB, Derived::Valid),
    (0x04FC, 0x04FC, Derived::Mapped),
    (0x04FD, 0x04FD, Derived::Valid),
    (0x04FE, 0x04FE, Derived::Mapped),
    (0x04FF, 0x04FF, Derived::Valid),
    (0x0500, 0x0500, Derived::Mapped),
    (0x0501, 0x0501, Derived::Valid),
    (0x0502, 0x0502, Derived::Mapped),
    (0x0503, 0x0503, Derived::Valid),
    (0x0504, 0x0504, Derived::Mapped),
    (0x0505, 0x0505, Derived::Valid),
    (0x0506, 0x0506, Derived::Mapped),
    (0x0507, 0x0507, Derived::Valid),
    (0x0508, 0x0508, Derived::Mapped),
    (0x0509, 0x0509, Derived::Valid),
    (0x050A, 0x050A, Derived::Mapped),
    (0x050B, 0x050B, Derived::Valid),
    (0x050C, 0x050C, Derived::Mapped),
    (0x050D, 0x050D, Derived::Valid),
    (0x050E, 0x050E, Derived::Mapped),
    (0x050F, 0x050F, Derived::Valid),
    (0x0510, 0x0510, Derived::Mapped),
    (0x0511, 0x0511, Derived::Valid),
    (0x0512, 0x0512, Derived::Mapped),
    (0x0513, 0x0513, Derived::Valid),
    (0x0514, 0x0514, Derived::Mapped),
    (0x0515, 0x0515, Derived::Valid),
    (0x0516, 0x0516, Derived::Mapped),
    (0x0517, 0x0517, Derived::Valid),
    (0x0518, 0x0518, Derived::Mapped),
    (0x0519, 0x0519, Derived::Valid),
    (0x051A, 0x051A, Derived::Mapped),
    (0x051B, 0x051B, Derived::Valid),
    (0x051C, 0x051C, Derived::Mapped),
    (0x051D, 0x051D, Derived::Valid),
    (0x051E, 0x051E, Derived::Mapped),
    (0x051F, 0x051F, Derived::Valid),
    (0x0520, 0x0520, Derived::Mapped),
    (0x0521, 0x0521, Derived::Valid),
    (0x0522, 0x0522, Derived::Mapped),
    (0x0523, 0x0523, Derived::Valid),
    (0x0524, 0x0524, Derived::Mapped),
    (0x0525, 0x0525, Derived::Valid),
    (0x0526, 0x0526, Derived::Mapped),
    (0x0527, 0x0527, Derived::Valid),
    (0x0528, 0x0528, Derived::Mapped),
    (0x0529, 0x0529, Derived::Valid),
    (0x052A, 0x052A, Derived::Mapped),
    (0x052B, 0x052B, Derived::Valid),
    (0x052C, 0x052C, Derived::Mapped),
    (0x052D, 0x052D, Derived::Valid),
    (0x052E, 0x052E, Derived::Mapped),
    (0x052F, 0x052F, Derived::Valid),
    (0x0531, 0x0556, Derived::Mapped),
    (0x0559, 0x0559, Derived::Valid),
    (0x0560, 0x0586, Derived::Valid),
    (0x0587, 0x0587, Derived::Mapped),
    (0x0588, 0x0588, Derived::Valid),
    (0x0591, 0x05BD, Derived::Valid),
    (0x05BF, 0x05BF, Derived::Valid),
    (0x05C1, 0x05C2, Derived::Valid),
    (0x05C4, 0x05C5, Derived::Valid),
    (0x05C7, 0x05C7, Derived::Valid),
    (0x05D0, 0x05EA, Derived::Valid),
    (0x05EF, 0x05F2, Derived::Valid),
    (0x05F3, 0x05F4, Derived::Contextual),
    (0x0610, 0x061A, Derived::Valid),
    (0x0620, 0x063F, Derived::Valid),
    (0x0641, 0x065F, Derived::Valid),
    (0x0660, 0x0669, Derived::Contextual),
    (0x066E, 0x0674, Derived::Valid),
    (0x0675, 0x0678, Derived::Mapped),
    (0x0679, 0x06D3, Derived::Valid),
    (0x06D5, 0x06DC, Derived::Valid),
    (0x06DF, 0x06E8, Derived::Valid),
    (0x06EA, 0x06EF, Derived::Valid),
    (0x06F0, 0x06F9, Derived::Contextual),
    (0x06FA, 0x06FF, Derived::Valid),
    (0x0710, 0x074A, Derived::Valid),
    (0x074D, 0x07B1, Derived::Valid),
    (0x07C0, 0x07F5, Derived::Valid),
    (0x07FD, 0x07FD, Derived::Valid),
    (0x0800, 0x082D, Derived::Valid),
    (0x0840, 0x085B, Derived::Valid),
    (0x0860, 0x086A, Derived::Valid),
    (0x0870, 0x0887, Derived::Valid),
    (0x0889, 0x088F, Derived::Valid),
    (0x0897, 0x08E1, Derived::Valid),
    (0x08E3, 0x0957, Derived::Valid),
    (0x0958, 0x095F, Derived::Mapped),
    (0x0960, 0x0963, Derived::Valid),
    (0x0966, 0x096F, Derived::Valid),
    (0x0971, 0x0983, Derived::Valid),
    (0x0985, 0x098C, Derived::Valid),
    (0x098F, 0x0990, Derived::Valid),
    (0x0993, 0x09A8, Derived::Valid),
    (0x09AA, 0x09B0, Derived::Valid),
    (0x09B2, 0x09B2, Derived::Valid),
    (0x09B6, 0x09B9, Derived::Valid),
    (0x09BC, 0x09C4, Derived::Valid),
    (0x09C7, 0x09C8, Derived::Valid),
    (0x09CB, 0x09CE, Derived::Valid),
    (0x09D7, 0x09D7, Derived::Valid),
    (0x09DC, 0x09DD, Derived::Mapped),
    (0x09DF, 0x09DF, Derived::Mapped),
    (0x09E0, 0x09E3, Derived::Valid),
    (0x09E6, 0x09F1, Derived::Valid),
    (0x09FC, 0x09FC, Derived::Valid),
    (0x09FE, 0x09FE, Derived::Valid),
    (0x0A01, 0x0A03, Derived::Valid),
    (0x0A05, 0x0A0A, Derived::Valid),
    (0x0A0F, 0x0A10, Derived::Valid),
    (0x0A13, 0x0A28, Derived::Valid),
    (0x0A2A, 0x0A30, Derived::Valid),
    (0x0A32, 0x0A32, Derived::Valid),
    (0x0A33, 0x0A33, Derived::Mapped),
    (0x0A35, 0x0A35, Derived::Valid),
    (0x0A36, 0x0A36, Derived::Mapped),
    (0x0A38, 0x0A39, Derived::Valid),
    (0x0A3C, 0x0A3C, Derived::Valid),
    (0x0A3E, 0x0A42, Derived::Valid),
    (0x0A47, 0x0A48, Derived::Valid),
    (0x0A4B, 0x0A4D, Derived::Valid),
    (0x0A51, 0x0A51, Derived::Valid),
    (0x0A59, 0x0A5B, Derived::Mapped),
    (0x0A5C, 0x0A5C, Derived::Valid),
    (0x0A5E, 0x0A5E, Derived::Mapped),
    (0x0A66, 0x0A75, Derived::Valid),
    (0x0A81, 0x0A83, Derived::Valid),
    (0x0A85, 0x0A8D, Derived::Valid),
    (0x0A8F, 0x0A91, Derived::Valid),
    (0x0A93, 0x0AA8, Derived::Valid),
    (0x0AAA, 0x0AB0, Derived::Valid),
    (0x0AB2, 0x0AB3, Derived::Valid),
    (0x0AB5, 0x0AB9, Derived::Valid),
    (0x0ABC, 0x0AC5, Derived::Valid),
    (0x0AC7, 0x0AC9, Derived::Valid),
    (0x0ACB, 0x0ACD, Derived::Valid),
    (0x0AD0, 0x0AD0, Derived::Valid),
    (0x0AE0, 0x0AE3, Derived::Valid),
    (0x0AE6, 0x0AEF, Derived::Valid),
    (0x0AF9, 0x0AFF, Derived::Valid),
    (0x0B01, 0x0B03, Derived::Valid),
    (0x0B05, 0x0B0C, Derived::Valid),
    (0x0B0F, 0x0B10, Derived::Valid),
    (0x0B13, 0x0B28, Derived::Valid),
    (0x0B2A, 0x0B30, Derived::Valid),
    (0x0B32, 0x0B33, Derived::Valid),
    (0x0B35, 0x0B39, Derived::Valid),
    (0x0B3C, 0x0B44, Derived::Valid),
    (0x0B47, 0x0B48, Derived::Valid),
    (0x0B4B, 0x0B4D, Derived::Valid),
    (0x0B55, 0x0B57, Derived::Valid),
    (0x0B5C, 0x0B5D, Derived::Mapped),
    (0x0B5F, 0x0B63, Derived::Valid),
    (0x0B66, 0x0B6F, Derived::Valid),
    (0x0B71, 0x0B71, Derived::Valid),
    (0x0B82, 0x0B83, Derived::Valid),
    (0x0B85, 0x0B8A, Derived::Valid),
    (0x0B8E, 0x0B90, Derived::Valid),
    (0x0B92, 0x0B95, Derived::Valid),
    (0x0B99, 0x0B9A, Derived::Valid),
    (0x0B9C, 0x0B9C, Derived::Valid),
    (0x0B9E, 0x0B9F, Derived::Valid),
    (0x0BA3, 0x0BA4, Derived::Valid),
    (0x0BA8, 0x0BAA, Derived::Valid),
    (0x0BAE, 0x0BB9, Derived::Valid),
    (0x0BBE, 0x0BC2, Derived::Valid),
    (0x0BC6, 0x0BC8, Derived::Valid),
    (0x0BCA, 0x0BCD, Derived::Valid),
    (0x0BD0, 0x0BD0, Derived::Valid),
    (0x0BD7, 0x0BD7, Derived::Valid),
    (0x0BE6, 0x0BEF, Derived::Valid),
    (0x0C00, 0x0C0C, Derived::Valid),
    (0x0C0E, 0x0C10, Derived::Valid),
    (0x0C12, 0x0C28, Derived::Valid),
    (0x0C2A, 0x0C39, Derived::Valid),
    (0x0C3C, 0x0C44, Derived::Valid),
    (0x0C46, 0x0C48, Derived::Valid),
    (0x0C4A, 0x0C4D, Derived::Valid),
    (0x0C55, 0x0C56, Derived::Valid),
    (0x0C58, 0x0C5A, Derived::Valid),
    (0x0C5C, 0x0C5D, Derived::Valid),
    (0x0C60, 0x0C63, Derived::Valid),
    (0x0C66, 0x0C6F, Derived::Valid),
    (0x0C80, 0x0C83, Derived::Valid),
    (0x0C85, 0x0C8C, Derived::Valid),
    (0x0C8E, 0x0C90, Derived::Valid),
    (0x0C92, 0x0CA8, Derived::Valid),
    (0x0CAA, 0x0CB3, Derived::Valid),
    (0x0CB5, 0x0CB9, Derived::Valid),
    (0x0CBC, 0x0CC4, Derived::Valid),
    (0x0CC6, 0x0CC8, Derived::Valid),
    (0x0CCA, 0x0CCD, Derived::Valid),
    (0x0CD5, 0x0CD6, Derived::Valid),
    (0x0CDC, 0x0CDE, Derived::Valid),
    (0x0CE0, 0x0CE3, Derived::Valid),
    (0x0CE6, 0x0CEF, Derived::Valid),
    (0x0CF1, 0x0CF3, Derived::Valid),
    (0x0D00, 0x0D0C, Derived::Valid),
    (0x0D0E, 0x0D10, Derived::Valid),
    (0x0D12, 0x0D44, Derived::Valid),
    (0x0D46, 0x0D48, Derived::Valid),
    (0x0D4A, 0x0D4E, Derived::Valid),
    (0x0D54, 0x0D57, Derived::Valid),
    (0x0D5F, 0x0D63, Derived::Valid),
    (0x0D66, 0x0D6F, Derived::Valid),
    (0x0D7A, 0x0D7F, Derived::Valid),
    (0x0D81, 0x0D83, Derived::Valid),
    (0x0D85, 0x0D96, Derived::Valid),
    (0x0D9A, 0x0DB1, Derived::Valid),
    (0x0DB3, 0x0DBB, Derived::Valid),
    (0x0DBD, 0x0DBD, Derived::Valid),
    (0x0DC0, 0x0DC6, Derived::Valid),
    (0x0DCA, 0x0DCA, Derived::Valid),
    (0x0DCF, 0x0DD4, Derived::Valid),
    (0x0DD6, 0x0DD6, Derived::Valid),
    (0x0DD8, 0x0DDF, Derived::Valid),
    (0x0DE6, 0x0DEF, Derived::Valid),
    (0x0DF2, 0x0DF3, Derived::Valid),
    (0x0E01, 0x0E32, Derived::Valid),
    (0x0E33, 0x0E33, Derived::Mapped),
    (0x0E34, 0x0E3A, Derived::Valid),
    (0x0E40, 0x0E4E, Derived::Valid),
    (0x0E50, 0x0E59, Derived::Valid),
    (0x0E81, 0x0E82, Derived::Valid),
    (0x0E84, 0x0E84, Derived::Valid),
    (0x0E86, 0x0E8A, Derived::Valid),
    (0x0E8C, 0x0EA3, Derived::Valid),
    (0x0EA5, 0x0EA5, Derived::Valid),
    (0x0EA7, 0x0EB2, Derived::Valid),
    (0x0EB3, 0x0EB3, Derived::Mapped),
    (0x0EB4, 0x0EBD, Derived::Valid),
    (0x0EC0, 0x0EC4, Derived::Valid),
    (0x0EC6, 0x0EC6, Derived::Valid),
    (0x0EC8, 0x0ECE, Derived::Valid),
    (0x0ED0, 0x0ED9, Derived::Valid),
    (0x0EDC, 0x0EDD, Derived::Mapped),
    (0x0EDE, 0x0EDF, Derived::Valid),
    (0x0F00, 0x0F00, Derived::Valid),
    (0x0F0B, 0x0F0B, Derived::Valid),
    (0x0F0C, 0x0F0C, Derived::Mapped),
    (0x0F18, 0x0F19, Derived::Valid),
    (0x0F20, 0x0F29, Derived::Valid),
    (0x0F35, 0x0F35, Derived::Valid),
    (0x0F37, 0x0F37, Derived::Valid),
    (0x0F39, 0x0F39, Derived::Valid),
    (0x0F3E, 0x0F42, Derived::Valid),
    (0x0F43, 0x0F43, Derived::Mapped),
    (0x0F44, 0x0F47, Derived::Valid),
    (0x0F49, 0x0F4C, Derived::Valid),
    (0x0F4D, 0x0F4D, Derived::Mapped),
    (0x0F4E, 0x0F51, Derived::Valid),
    (0x0F52, 0x0F52, Derived::Mapped),
    (0x0F53, 0x0F56, Derived::Valid),
    (0x0F57, 0x0F57, Derived::Mapped),
    (0x0F58, 0x0F5B, Derived::Valid),
    (0x0F5C, 0x0F5C, Derived::Mapped),
    (0x0F5D, 0x0F68, Derived::Valid),
    (0x0F69, 0x0F69, Derived::Mapped),
    (0x0F6A, 0x0F6C, Derived::Valid),
    (0x0F71, 0x0F72, Derived::Valid),
    (0x0F73, 0x0F73, Derived::Mapped),
    (0x0F74, 0x0F74, Derived::Valid),
    (0x0F75, 0x0F79, Derived::Mapped),
    (0x0F7A, 0x0F80, Derived::Valid),
    (0x0F81, 0x0F81, Derived::Mapped),
    (0x0F82, 0x0F84, Derived::Valid),
    (0x0F86, 0x0F92, Derived::Valid),
    (0x0F93, 0x0F93, Derived::Mapped),
    (0x0F94, 0x0F97, Derived::Valid),
    (0x0F99, 0x0F9C, Derived::Valid),
    (0x0F9D, 0x0F9D, Derived::Mapped),
    (0x0F9E, 0x0FA1, Derived::Valid),
    (0x0FA2, 0x0FA2, Derived::Mapped),
    (0x0FA3, 0x0FA6, Derived::Valid),
    (0x0FA7, 0x0FA7, Derived::Mapped),
    (0x0FA8, 0x0FAB, Derived::Valid),
    (0x0FAC, 0x0FAC, Derived::Mapped),
    (0x0FAD, 0x0FB8, Derived::Valid),
    (0x0FB9, 0x0FB9, Derived::Mapped),
    (0x0FBA, 0x0FBC, Derived::Valid),
    (0x0FC6, 0x0FC6, Derived::Valid),
    (0x1000, 0x1049, Derived::Valid),
    (0x1050, 0x109D, Derived::Valid),
    (0x10A0, 0x10C5, Derived::Mapped),
    (0x10C7, 0x10C7, Derived::Mapped),
    (0x10CD, 0x10CD, Derived::Mapped),
    (0x10D0, 0x10FA, Derived::Valid),
    (0x10FC, 0x10FC, Derived::Mapped),
    (0x10FD, 0x10FF, Derived::Valid),
    (0x115F, 0x1160, Derived::Ignored),
    (0x1200, 0x1248, Derived::Valid),
    (0x124A, 0x124D, Derived::Valid),
    (0x1250, 0x1256, Derived::Valid),
    (0x1258, 0x1258, Derived::Valid),
    (0x125A, 0x125D, Derived::Valid),
    (0x1260, 0x1288, Derived::Valid),
    (0x128A, 0x128D, Derived::Valid),
    (0x1290, 0x12B0, Derived::Valid),
    (0x12B2, 0x12B5, Derived::Valid),
    (0x12B8, 0x12BE, Derived::Valid),
    (0x12C0, 0x12C0, Derived::Valid),
    (0x12C2, 0x12C5, Derived::Valid),
    (0x12C8, 0x12D6, Derived::Valid),
    (0x12D8, 0x1310, Derived::Valid),
    (0x1312, 0x1315, Derived::Valid),
    (0x1318, 0x135A, Derived::Valid),
    (0x135D, 0x135F, Derived::Valid),
    (0x1380, 0x138F, Derived::Valid),
    (0x13A0, 0x13F5, Derived::Valid),
    (0x13F8, 0x13FD, Derived::Mapped),
    (0x1401, 0x166C, Derived::Valid),
    (0x166F, 0x167F, Derived::Valid),
    (0x1681, 0x169A, Derived::Valid),
    (0x16A0, 0x16EA, Derived::Valid),
    (0x16F1, 0x16F8, Derived::Valid),
    (0x1700, 0x1715, Derived::Valid),
    (0x171F, 0x1734, Derived::Valid),
    (0x1740, 0x1753, Derived::Valid),
    (0x1760, 0x176C, Derived::Valid),
    (0x176E, 0x1770, Derived::Valid),
    (0x1772, 0x1773, Derived::Valid),
    (0x1780, 0x17B3, Derived::Valid),
    (0x17B4, 0x17B5, Derived::Ignored),
    (0x17B6, 0x17D3, Derived::Valid),
    (0x17D7, 0x17D7, Derived::Valid),
    (0x17DC, 0x17DD, Derived::Valid),
    (0x17E0, 0x17E9, Derived::Valid),
    (0x180B, 0x180F, Derived::Ignored),
    (0x1810, 0x1819, Derived::Valid),
    (0x1820, 0x1878, Derived::Valid),
    (0x1880, 0x18AA, Derived::Valid),
    (0x18B0, 0x18F5, Derived::Valid),
    (0x1900, 0x191E, Derived::Valid),
    (0x1920, 0x192B, Derived::Valid),
    (0x1930, 0x193B, Derived::Valid),
    (0x1946, 0x196D, Derived::Valid),
    (0x1970, 0x1974, Derived::Valid),
    (0x1980, 0x19AB, Derived::Valid),
    (0x19B0, 0x19C9, Derived::Valid),
    (0x19D0, 0x19D9, Derived::Valid),
    (0x1A00, 0x1A1B, Derived::Valid),
    (0x1A20, 0x1A5E, Derived::Valid),
    (0x1A60, 0x1A7C, Derived::Valid),
    (0x1A7F, 0x1A89, Derived::Valid),
    (0x1A90, 0x1A99, Derived::Valid),
    (0x1AA7, 0x1AA7, Derived::Valid),
    (0x1AB0, 0x1ABD, Derived::Valid),
    (0x1ABF, 0x1ADD, Derived::Valid),
    (0x1AE0, 0x1AEB, Derived::Valid),
    (0x1B00, 0x1B4C, Derived::Valid),
    (0x1B50, 0x1B59, Derived::Valid),
    (0x1B6B, 0x1B73, Derived::Valid),
    (0x1B80, 0x1BF3, Derived::Valid),
    (0x1C00, 0x1C37, Derived::Valid),
    (0x1C40, 0x1C49, Derived::Valid),
    (0x1C4D, 0x1C7D, Derived::Valid),
    (0x1C80, 0x1C89, Derived::Mapped),
    (0x1C8A, 0x1C8A, Derived::Valid),
    (0x1C90, 0x1CBA, Derived::Mapped),
    (0x1CBD, 0x1CBF, Derived::Mapped),
    (0x1CD0, 0x1CD2, Derived::Valid),
    (0x1CD4, 0x1CFA, Derived::Valid),
    (0x1D00, 0x1D2B, Derived::Valid),
    (0x1D2C, 0x1D2E, Derived::Mapped),
    (0x1D2F, 0x1D2F, Derived::Valid),
    (0x1D30, 0x1D3A, Derived::Mapped),
    (0x1D3B, 0x1D3B, Derived::Valid),
    (0x1D3C, 0x1D4D, Derived::Mapped),
    (0x1D4E, 0x1D4E, Derived::Valid),
    (0x1D4F, 0x1D6A, Derived::Mapped),
    (0x1D6B, 0x1D77, Derived::Valid),
    (0x1D78, 0x1D78, Derived::Mapped),
    (0x1D79, 0x1D9A, Derived::Valid),
    (0x1D9B, 0x1DBF, Derived::Mapped),
    (0x1DC0, 0x1DFF, Derived::Valid),
    (0x1E00, 0x1E00, Derived::Mapped),
    (0x1E01, 0x1E01, Derived::Valid),
    (0x1E02, 0x1E02, Derived::Mapped),
    (0x1E03, 0x1E03, Derived::Valid),
    (0x1E04, 0x1E04, Derived::Mapped),
    (0x1E05, 0x1E05, Derived::Valid),
    (0x1E06, 0x1E06, Derived::Mapped),
    (0x1E07, 0x1E07, Derived::Valid),
    (0x1E08, 0x1E08, Derived::Mapped),
    (0x1E09, 0x1E09, Derived::Valid),
    (0x1E0A, 0x1E0A, Derived::Mapped),
    (0x1E0B, 0x1E0B, Derived::Valid),
    (0x1E0C, 0x1E0C, Derived::Mapped),
    (0x1E0D, 0x1E0D, Derived::Valid),
    (0x1E0E, 0x1E0E, Derived::Mapped),
    (0x1E0F, 0x1E0F, Derived::Valid),
    (0x1E10, 0x1E10, Derived::Mapped),
    (0x1E11, 0x1E11, Derived::Valid),
    (0x1E12, 0x1E12, Derived::Mapped),
    (0x1E13, 0x1E13, Derived::Valid),
    (0x1E14, 0x1E14, Derived::Mapped),
    (0x1E15, 0x1E15, Derived::Valid),
    (0x1E16, 0x1E16, Derived::Mapped),
    (0x1E17, 0x1E17, Derived::Valid),
    (0x1E18, 0x1E18, Derived::Mapped),
    (0x1E19, 0x1E19, Derived::Valid),
    (0x1E1A, 0x1E1A, Derived::Mapped),
    (0x1E1B, 0x1E1B, Derived::Valid),
    (0x1E1C, 0x1E1C, Derived::Mapped),
    (0x1E1D, 0x1E1D, Derived::Valid),
    (0x1E1E, 0x1E1E, Derived::Mapped),
    (0x1E1F, 0x1E1F, Derived::Valid),
    (0x1E20, 0x1E20, Derived::Mapped),
    (0x1E21, 0x1E21, Derived::Valid),
    (0x1E22, 0x1E22, Derived::Mapped),
    (0x1E23, 0x1E23, Derived::Valid),
    (0x1E24, 0x1E24, Derived::Mapped),
    (0x1E25, 0x1E25, Derived::Valid),
    (0x1E26, 0x1E26, Derived::Mapped),
    (0x1E27, 0x1E27, Derived::Valid),
    (0x1E28, 0x1E28, Derived::Mapped),
    (0x1E29, 0x1E29, Derived::Valid),
    (0x1E2A, 0x1E2A, Derived::Mapped),
    (0x1E2B, 0x1E2B, Derived::Valid),
    (0x1E2C, 0x1E2C, Derived::Mapped),
    (0x1E2D, 0x1E2D, Derived::Valid),
    (0x1E2E, 0x1E2E, Derived::Mapped),
    (0x1E2F, 0x1E2F, Derived::Valid),
    (0x1E30, 0x1E30, Derived::Mapped),
    (0x1E31, 0x1E31, Derived::Valid),
    (0x1E32, 0x1E32, Derived::Mapped),
    (0x1E33, 0x1E33, Derived::Valid),
    (0x1E34, 0x1E34, Derived::Mapped),
    (0x1E35, 0x1E35, Derived::Valid),
    (0x1E36, 0x1E36, Derived::Mapped),
    (0x1E37, 0x1E37, Derived::Valid),
    (0x1E38, 0x1E38, Derived::Mapped),
    (0x1E39, 0x1E39, Derived::Valid),
    (0x1E3A, 0x1E3A, Derived::Mapped),
    (0x1E3B, 0x1E3B, Derived::Valid),
    (0x1E3C, 0x1E3C, Derived::Mapped),
    (0x1E3D, 0x1E3D, Derived::Valid),
    (0x1E3E, 0x1E3E, Derived::Mapped),
    (0x1E3F, 0x1E3F, Derived::Valid),
    (0x1E40, 0x1E40, Derived::Mapped),
    (0x1E41, 0x1E41, Derived::Valid),
    (0x1E42, 0x1E42, Derived::Mapped),
    (0x1E43, 0x1E43, Derived::Valid),
    (0x1E44, 0x1E44, Derived::Mapped),
    (0x1E45, 0x1E45, Derived::Valid),
    (0x1E46, 0x1E46, Derived::Mapped),
    (0x1E47, 0x1E47, Derived::Valid),
    (0x1E48, 0x1E48, Derived::Mapped),
    (0x1E49, 0x1E49, Derived::Valid),
    (0x1E4A, 0x1E4A, Derived::Mapped),
    (0x1E4B, 0x1E4B, Derived::Valid),
    (0x1E4C, 0x1E4C, Derived::Mapped),
    (0x1E4D, 0x1E4D, Derived::Valid),
    (0x1E4E, 0x1E4E, Derived::Mapped),
    (0x1E4F, 0x1E4F, Derived::Valid),
    (0x1E50, 0x1E50, Derived::Mapped),
    (0x1E51, 0x1E51, Derived::Valid),
    (0x1E52, 0x1E52, Derived::Mapped),
    (0x1E53, 0x1E53, Derived::Valid),
    (0x1E54, 0x1E54, Derived::Mapped),
    (0x1E55, 0x1E55, Derived::Valid),
    (0x1E56, 0x1E56, Derived::Mapped),
    (0x1E57, 0x1E57, Derived::Valid),
    (0x1E58, 0x1E58, Derived::Mapped),
    (0x1E59, 0x1E59, Derived::Valid),
    (0x1E5A, 0x1E5A, Derived::Mapped),
    (0x1E5B, 0x1E5B, Derived::Valid),
    (0x1E5C, 0x1E5C, Derived::Mapped),
    (0x1E5D, 0x1E5D, Derived::Valid),
    (0x1E5E, 0x1E5E, Derived::Mapped),
    (0x1E5F, 0x1E5F, Derived::Valid),
    (0x1E60, 0x1E60, Derived::Mapped),
    (0x1E61, 0x1E61, Derived::Valid),
    (0x1E62, 0x1E62, Derived::Mapped),
    (0x1E63, 0x1E63, Derived::Valid),
    (0x1E64, 0x1E64, Derived::Mapped),
    (0x1E65, 0x1E65, Derived::Valid),
    (0x1E66, 0x1E66, Derived::Mapped),
    (0x1E67, 0x1E67, Derived::Valid),
    (0x1E68, 0x1E68, Derived::Mapped),
    (0x1E69, 0x1E69, Derived::Valid),
    (0x1E6A, 0x1E6A, Derived::Mapped),
    (0x1E6B, 0x1E6B, Derived::Valid),
    (0x1E6C, 0x1E6C, Derived::Mapped),
    (0x1E6D, 0x1E6D, Derived::Valid),
    (0x1E6E, 0x1E6E, Derived::Mapped),
    (0x1E6F, 0x1E6F, Derived::Valid),
    (0x1E70, 0x1E70, Derived::Mapped),
    (0x1E71, 0x1E71, Derived::Valid),
    (0x1E72, 0x1E72, Derived::Mapped),
    (0x1E73, 0x1E73, Derived::Valid),
    (0x1E74, 0x1E74, Derived::Mapped),
    (0x1E75, 0x1E75, Derived::Valid),
    (0x1E76, 0x1E76, Derived::Mapped),
    (0x1E77, 0x1E77, Derived::Valid),
    (0x1E78, 0x1E78, Derived::Mapped),
    (0x1E79, 0x1E79, Derived::Valid),
    (0x1E7A, 0x1E7A, Derived::Mapped),
    (0x1E7B, 0x1E7B, Derived::Valid),
    (0x1E7C, 0x1E7C, Derived::Mapped),
    (0x1E7D, 0x1E7D, Derived::Valid),
    (0x1E7E, 0x1E7E, Derived::Mapped),
    (0x1E7F, 0x1E7F, Derived::Valid),
    (0x1E80, 0x1E80, Derived::Mapped),
    (0x1E81, 0x1E81, Derived::Valid),
    (0x1E82, 0x1E82, Derived::Mapped),
    (0x1E83, 0x1E83, Derived::Valid),
    (0x1E84, 0x1E84, Derived::Mapped),
    (0x1E85, 0x1E85, Derived::Valid),
    (0x1E86, 0x1E86, Derived::Mapped),
    (0x1E87, 0x1E87, Derived::Valid),
    (0x1E88, 0x1E88, Derived::Mapped),
    (0x1E89, 0x1E89, Derived::Valid),
    (0x1E8A, 0x1E8A, Derived::Mapped),
    (0x1E8B, 0x1E8B, Derived::Valid),
    (0x1E8C, 0x1E8C, Derived::Mapped),
    (0x1E8D, 0x1E8D, Derived::Valid),
    (0x1E8E, 0x1E8E, Derived::Mapped),
    (0x1E8F, 0x1E8F, Derived::Valid),
    (0x1E90, 0x1E90, Derived::Mapped),
    (0x1E91, 0x1E91, Derived::Valid),
    (0x1E92, 0x1E92, Derived::Mapped),
    (0x1E93, 0x1E93, Derived::Valid),
    (0x1E94, 0x1E94, Derived::Mapped),
    (0x1E95, 0x1E99, Derived::Valid),
    (0x1E9A, 0x1E9B, Derived::Mapped),
    (0x1E9C, 0x1E9D, Derived::Valid),
    (0x1E9E, 0x1E9E, Derived::Mapped),
    (0x1E9F, 0x1E9F, Derived::Valid),
    (0x1EA0, 0x1EA0, Derived::Mapped),
    (0x1EA1, 0x1EA1, Derived::Valid),
    (0x1EA2, 0x1EA2, Derived::Mapped),
    (0x1EA3, 0x1EA3, Derived::Valid),
    (0x1EA4, 0x1EA4, Derived::Mapped),
    (0x1EA5, 0x1EA5, Derived::Valid),
    (0x1EA6, 0x1EA6, Derived::Mapped),
    (0x1EA7, 0x1EA7, Derived::Valid),
    (0x1EA8, 0x1EA8, Derived::Mapped),
    (0x1EA9, 0x1EA9, Derived::Valid),
    (0x1EAA, 0x1EAA, Derived::Mapped),
    (0x1EAB, 0x1EAB, Derived::Valid),
    (0x1EAC, 0x1EAC, Derived::Mapped),
    (0x1EAD, 0x1EAD, Derived::Valid),
    (0x1EAE, 0x1EAE, Derived::Mapped),
    (0x1EAF, 0x1EAF, Derived::Valid),
    (0x1EB0, 0x1EB0, Derived::Mapped),
    (0x1EB1, 0x1EB1, Derived::Valid),
    (0x1EB2, 0x1EB2, Derived::Mapped),
    (0x1EB3, 0x1EB3, Derived::Valid),
    (0x1EB4, 0x1EB4, Derived::Mapped),
    (0x1EB5, 0x1EB5, Derived::Valid),
    (0x1EB6, 0x1EB6, Derived::Mapped),
    (0x1EB7, 0x1EB7, Derived::Valid),
    (0x1EB8, 0x1EB8, Derived::Mapped),
    (0x1EB9, 0x1EB9, Derived::Valid),
    (0x1EBA, 0x1EBA, Derived::Mapped),
    (0x1EBB, 0x1EBB, Derived::Valid),
    (0x1EBC, 0x1EBC, Derived::Mapped),
    (0x1EBD, 0x1EBD, Derived::Valid),
    (0x1EBE, 0x1EBE, Derived::Mapped),
    (0x1EBF, 0x1EBF, Derived::Valid),
    (0x1EC0, 0x1EC0, Derived::Mapped),
    (0x1EC1, 0x1EC1, Derived::Valid),
    (0x1EC2, 0x1EC2, Derived::Mapped),
    (0x1EC3, 0x1EC3, Derived::Valid),
    (0x1EC4, 0x1EC4, Derived::Mapped),
    (0x1EC5, 0x1EC5, Derived::Valid),
    (0x1EC6, 0x1EC6, Derived::Mapped),
    (0x1EC7, 0x1EC7, Derived::Valid),
    (0x1EC8, 0x1EC8, Derived::Mapped),
    (0x1EC9, 0x1EC9, Derived::Valid),
    (0x1ECA, 0x1ECA, Derived::Mapped),
    (0x1ECB, 0x1ECB, Derived::Valid),
    (0x1ECC, 0x1ECC, Derived::Mapped),
    (0x1ECD, 0x1ECD, Derived::Valid),
    (0x1ECE, 0x1ECE, Derived::Mapped),
    (0x1ECF, 0x1ECF, Derived::Valid),
    (0x1ED0, 0x1ED0, Derived::Mapped),
    (0x1ED1, 0x1ED1, Derived::Valid),
    (0x1ED2, 0x1ED2, Derived::Mapped),
    (0x1ED3, 0x1ED3, Derived::Valid),
    (0x1ED4, 0x1ED4, Derived::Mapped),
    (0x1ED5, 0x1ED5, Derived::Valid),
    (0x1ED6, 0x1ED6, Derived::Mapped),
    (0x1ED7, 0x1ED7, Derived::Valid),
    (0x1ED8, 0x1ED8, Derived::Mapped),
    (0x1ED9, 0x1ED9, Derived::Valid),
    (0x1EDA, 0x1EDA, Derived::Mapped),
    (0x1EDB, 0x1EDB, Derived::Valid),
    (0x1EDC, 0x1EDC, Derived::Mapped),
    (0x1EDD, 0x1EDD, Derived::Valid),
    (0x1EDE, 0x1EDE, Derived::Mapped),
    (0x1EDF, 0x1EDF, Derived::Valid),
    (0x1EE0, 0x1EE0, Derived::Mapped),
    (0x1EE1, 0x1EE1, Derived::Valid),
    (0x1EE2, 0x1EE2, Derived::Mapped),
    (0x1EE3, 0x1EE3, Derived::Valid),
    (0x1EE4, 0x1EE4, Derived::Mapped),
    (0x1EE5, 0x1EE5, Derived::Valid),
    (0x1EE6, 0x1EE6, Derived::Mapped),
    (0x1EE7, 0x1EE7, Derived::Valid),
    (0x1EE8, 0x1EE8, Derived::Mapped),
    (0x1EE9, 0x1EE9, Derived::Valid),
    (0x1EEA, 0x1EEA, Derived::Mapped),
    (0x1EEB, 0x1EEB, Derived::Valid),
    (0x1EEC, 0x1EEC, Derived::Mapped),
    (0x1EED, 0x1EED, Derived::Valid),
    (0x1EEE, 0x1EEE, Derived::Mapped),
    (0x1EEF, 0x1EEF, Derived::Valid),
    (0x1EF0, 0x1EF0, Derived::Mapped),
    (0x1EF1, 0x1EF1, Derived::Valid),
    (0x1EF2, 0x1EF2, Derived::Mapped),
    (0x1EF3, 0x1EF3, Derived::Valid),
    (0x1EF4, 0x1EF4, Derived::Mapped),
    (0x1EF5, 0x1EF5, Derived::Valid),
    (0x1EF6, 0x1EF6, Derived::Mapped),
    (0x1EF7, 0x1EF7, Derived::Valid),
    (0x1EF8, 0x1EF8, Derived::Mapped),
    (0x1EF9, 0x1EF9, Derived::Valid),
    (0x1EFA, 0x1EFA, Derived::Mapped),
    (0x1EFB, 0x1EFB, Derived::Valid),
    (0x1EFC, 0x1EFC, Derived::Mapped),
    (0x1EFD, 0x1EFD, Derived::Valid),
    (0x1EFE, 0x1EFE, Derived::Mapped),
    (0x1EFF, 0x1F07, Derived::Valid),
    (0x1F08, 0x1F0F, Derived::Mapped),
    (0x1F10, 0x1F15, Derived::Valid),
    (0x1F18, 0x1F1D, Derived::Mapped),
    (0x1F20, 0x1F27, Derived::Valid),
    (0x1F28, 0x1F2F, Derived::Mapped),
    (0x1F30, 0x1F37, Derived::Valid),
    (0x1F38, 0x1F3F, Derived::Mapped),
    (0x1F40, 0x1F45, Derived::Valid),
    (0x1F48, 0x1F4D, Derived::Mapped),
    (0x1F50, 0x1F57, Derived::Valid),
    (0x1F59, 0x1F59, Derived::Mapped),
    (0x1F5B, 0x1F5B, Derived::Mapped),
    (0x1F5D, 0x1F5D, Derived::Mapped),
    (0x1F5F, 0x1F5F, Derived::Mapped),
    (0x1F60, 0x1F67, Derived::Valid),
    (0x1F68, 0x1F6F, Derived::Mapped),
    (0x1F70, 0x1F70, Derived::Valid),
    (0x1F71, 0x1F71, Derived::Mapped),
    (0x1F72, 0x1F72, Derived::Valid),
    (0x1F73, 0x1F73, Derived::Mapped),
    (0x1F74, 0x1F74, Derived::Valid),
    (0x1F75, 0x1F75, Derived::Mapped),
    (0x1F76, 0x1F76, Derived::Valid),
    (0x1F77, 0x1F77, Derived::Mapped),
    (0x1F78, 0x1F78, Derived::Valid),
    (0x1F79, 0x1F79, Derived::Mapped),
    (0x1F7A, 0x1F7A, Derived::Valid),
    (0x1F7B, 0x1F7B, Derived::Mapped),
    (0x1F7C, 0x1F7C, Derived::Valid),
    (0x1F7D, 0x1F7D, Derived::Mapped),
    (0x1F80, 0x1FAF, Derived::Mapped),
    (0x1FB0, 0x1FB1, Derived::Valid),
    (0x1FB2, 0x1FB4, Derived::Mapped),
    (0x1FB6, 0x1FB6, Derived::Valid),
    (0x1FB7, 0x1FC4, Derived::Mapped),
    (0x1FC6, 0x1FC6, Derived::Valid),
    (0x1FC7, 0x1FCF, Derived::Mapped),
    (0x1FD0, 0x1FD2, Derived::Valid),
    (0x1FD3, 0x1FD3, Derived::Mapped),
    (0x1FD6, 0x1FD7, Derived::Valid),
    (0x1FD8, 0x1FDB, Derived::Mapped),
    (0x1FDD, 0x1FDF, Derived::Mapped),
    (0x1FE0, 0x1FE2, Derived::Valid),
    (0x1FE3, 0x1FE3, Derived::Mapped),
    (0x1FE4, 0x1FE7, Derived::Valid),
    (0x1FE8, 0x1FEF, Derived::Mapped),
    (0x1FF2, 0x1FF4, Derived::Mapped),
    (0x1FF6, 0x1FF6, Derived::Valid),
    (0x1FF7, 0x1FFE, Derived::Mapped),
    (0x2000, 0x200A, Derived::Mapped),
    (0x200B, 0x200B, Derived::Ignored),
    (0x200C, 0x200D, Derived::Contextual),
    (0x2011, 0x2011, Derived::Mapped),
    (0x2017, 0x2017, Derived::Mapped),
    (0x202F, 0x202F, Derived::Mapped),
    (0x2033, 0x2034, Derived::Mapped),
    (0x2036, 0x2037, Derived::Mapped),
    (0x203C, 0x203C, Derived::Mapped),
    (0x203E, 0x203E, Derived::Mapped),
    (0x2047, 0x2049, Derived::Mapped),
    (0x2057, 0x2057, Derived::Mapped),
    (0x205F, 0x205F, Derived::Mapped),
    (0x2060, 0x2064, Derived::Ignored),
    (0x206A, 0x206F, Derived::Ignored),
    (0x2070, 0x2071, Derived::Mapped),
    (0x2074, 0x208E, Derived::Mapped),
    (0x2090, 0x209C, Derived::Mapped),
    (0x20A8, 0x20A8, Derived::Mapped),
    (0x2100, 0x2103, Derived::Mapped),
    (0x2105, 0x2107, Derived::Mapped),
    (0x2109, 0x2113, Derived::Mapped),
    (0x2115, 0x2116, Derived::Mapped),
    (0x2119, 0x211D, Derived::Mapped),
    (0x2120, 0x2122, Derived::Mapped),
    (0x2124, 0x2124, Derived::Mapped),
    (0x2126, 0x2126, Derived::Mapped),
    (0x2128, 0x2128, Derived::Mapped),
    (0x212A, 0x212D, Derived::Mapped),
    (0x212F, 0x2139, Derived::Mapped),
    (0x213B, 0x2140, Derived::Mapped),
    (0x2145, 0x2149, Derived::Mapped),
    (0x214E, 0x214E, Derived::Valid),
    (0x2150, 0x217F, Derived::Mapped),
    (0x2183, 0x2183, Derived::Mapped),
    (0x2184, 0x2184, Derived::Valid),
    (0x2189, 0x2189, Derived::Mapped),
    (0x222C, 0x222D, Derived::Mapped),
    (0x222F, 0x2230, Derived::Mapped),
    (0x2329, 0x232A, Derived::Mapped),
    (0x2460, 0x2487, Derived::Mapped),
    (0x249C, 0x24EA, Derived::Mapped),
    (0x2A0C, 0x2A0C, Derived::Mapped),
    (0x2A74, 0x2A76, Derived::Mapped),
    (0x2ADC, 0x2ADC, Derived::Mapped),
    (0x2C00, 0x2C2F, Derived::Mapped),
    (0x2C30, 0x2C5F, Derived::Valid),
    (0x2C60, 0x2C60, Derived::Mapped),
    (0x2C61, 0x2C61, Derived::Valid),
    (0x2C62, 0x2C64, Derived::Mapped),
    (0x2C65, 0x2C66, Derived::Valid),
    (0x2C67, 0x2C67, Derived::Mapped),
    (0x2C68, 0x2C68, Derived::Valid),
    (0x2C69, 0x2C69, Derived::Mapped),
    (0x2C6A, 0x2C6A, Derived::Valid),
    (0x2C6B, 0x2C6B, Derived::Mapped),
    (0x2C6C, 0x2C6C, Derived::Valid),
    (0x2C6D, 0x2C70, Derived::Mapped),
    (0x2C71, 0x2C71, Derived::Valid),
    (0x2C72, 0x2C72, Derived::Mapped),
    (0x2C73, 0x2C74, Derived::Valid),
    (0x2C75, 0x2C75, Derived::Mapped),
    (0x2C76, 0x2C7B, Derived::Valid),
    (0x2C7C, 0x2C80, Derived::Mapped),
    (0x2C81, 0x2C81, Derived::Valid),
    (0x2C82, 0x2C82, Derived::Mapped),
    (0x2C83, 0x2C83, Derived::Valid),
    (0x2C84, 0x2C84, Derived::Mapped),
    (0x2C85, 0x2C85, Derived::Valid),
    (0x2C86, 0x2C86, Derived::Mapped),
    (0x2C87, 0x2C87, Derived::Valid),
    (0x2C88, 0x2C88, Derived::Mapped),
    (0x2C89, 0x2C89, Derived::Valid),
    (0x2C8A, 0x2C8A, Derived::Mapped),
    (0x2C8B, 0x2C8B, Derived::Valid),
    (0x2C8C, 0x2C8C, Derived::Mapped),
    (0x2C8D, 0x2C8D, Derived::Valid),
    (0x2C8E, 0x2C8E, Derived::Mapped),
    (0x2C8F, 0x2C8F, Derived::Valid),
    (0x2C90, 0x2C90, Derived::Mapped),
    (0x2C91, 0x2C91, Derived::Valid),
    (0x2C92, 0x2C92, Derived::Mapped),
    (0x2C93, 0x2C93, Derived::Valid),
    (0x2C94, 0x2C94, Derived::Mapped),
    (0x2C95, 0x2C95, Derived::Valid),
    (0x2C96, 0x2C96, Derived::Mapped),
    (0x2C97, 0x2C97, Derived::Valid),
    (0x2C98, 0x2C98, Derived::Mapped),
    (0x2C99, 0x2C99, Derived::Valid),
    (0x2C9A, 0x2C9A, Derived::Mapped),
    (0x2C9B, 0x2C9B, Derived::Valid),
    (0x2C9C, 0x2C9C, Derived::Mapped),
    (0x2C9D, 0x2C9D, Derived::Valid),
    (0x2C9E, 0x2C9E, Derived::Mapped),
    (0x2C9F, 0x2C9F, Derived::Valid),
    (0x2CA0, 0x2CA0, Derived::Mapped),
    (0x2CA1, 0x2CA1, Derived::Valid),
    (0x2CA2, 0x2CA2, Derived::Mapped),
    (0x2CA3, 0x2CA3, Derived::Valid),
    (0x2CA4, 0x2CA4, Derived::Mapped),
    (0x2CA5, 0x2CA5, Derived::Valid),
    (0x2CA6, 0x2CA6, Derived::Mapped),
    (0x2CA7, 0x2CA7, Derived::Valid),
    (0x2CA8, 0x2CA8, Derived::Mapped),
    (0x2CA9, 0x2CA9, Derived::Valid),
    (0x2CAA, 0x2CAA, Derived::Mapped),
    (0x2CAB, 0x2CAB, Derived::Valid),
    (0x2CAC, 0x2CAC, Derived::Mapped),
    (0x2CAD, 0x2CAD, Derived::Valid),
    (0x2CAE, 0x2CAE, Derived::Mapped),
    (0x2CAF, 0x2CAF, Derived::Valid),
    (0x2CB0, 0x2CB0, Derived::Mapped),
    (0x2CB1, 0x2CB1, Derived::Valid),
    (0x2CB2, 0x2CB2, Derived::Mapped),
    (0x2CB3, 0x2CB3, Derived::Valid),
    (0x2CB4, 0x2CB4, Derived::Mapped),
    (0x2CB5, 0x2CB5, Derived::Valid),
    (0x2CB6, 0x2CB6, Derived::Mapped),
    (0x2CB7, 0x2CB7, Derived::Valid),
    (0x2CB8, 0x2CB8, Derived::Mapped),
    (0x2CB9, 0x2CB9, Derived::Valid),
    (0x2CBA, 0x2CBA, Derived::Mapped),
    (0x2CBB, 0x2CBB, Derived::Valid),
    (0x2CBC, 0x2CBC, Derived::Mapped),
    (0x2CBD, 0x2CBD, Derived::Valid),
    (0x2CBE, 0x2CBE, Derived::Mapped),
    (0x2CBF, 0x2CBF, Derived::Valid),
    (0x2CC0, 0x2CC0, Derived::Mapped),
    (0x2CC1, 0x2CC1, Derived::Valid),
    (0x2CC2, 0x2CC2, Derived::Mapped),
    (0x2CC3, 0x2CC3, Derived::Valid),
    (0x2CC4, 0x2CC4, Derived::Mapped),
    (0x2CC5, 0x2CC5, Derived::Valid),
    (0x2CC6, 0x2CC6, Derived::Mapped),
    (0x2CC7, 0x2CC7, Derived::Valid),
    (0x2CC8, 0x2CC8, Derived::Mapped),
    (0x2CC9, 0x2CC9, Derived::Valid),
    (0x2CCA, 0x2CCA, Derived::Mapped),
    (0x2CCB, 0x2CCB, Derived::Valid),
    (0x2CCC, 0x2CCC, Derived::Mapped),
    (0x2CCD, 0x2CCD, Derived::Valid),
    (0x2CCE, 0x2CCE, Derived::Mapped),
    (0x2CCF, 0x2CCF, Derived::Valid),
    (0x2CD0, 0x2CD0, Derived::Mapped),
    (0x2CD1, 0x2CD1, Derived::Valid),
    (0x2CD2, 0x2CD2, Derived::Mapped),
    (0x2CD3, 0x2CD3, Derived::Valid),
    (0x2CD4, 0x2CD4, Derived::Mapped),
    (0x2CD5, 0x2CD5, Derived::Valid),
    (0x2CD6, 0x2CD6, Derived::Mapped),
    (0x2CD7, 0x2CD7, Derived::Valid),
    (0x2CD8, 0x2CD8, Derived::Mapped),
    (0x2CD9, 0x2CD9, Derived::Valid),
    (0x2CDA, 0x2CDA, Derived::Mapped),
    (0x2CDB, 0x2CDB, Derived::Valid),
    (0x2CDC, 0x2CDC, Derived::Mapped),
    (0x2CDD, 0x2CDD, Derived::Valid),
    (0x2CDE, 0x2CDE, Derived::Mapped),
    (0x2CDF, 0x2CDF, Derived::Valid),
    (0x2CE0, 0x2CE0, Derived::Mapped),
    (0x2CE1, 0x2CE1, Derived::Valid),
    (0x2CE2, 0x2CE2, Derived::Mapped),
    (0x2CE3, 0x2CE4, Derived::Valid),
    (0x2CEB, 0x2CEB, Derived::Mapped),
    (0x2CEC, 0x2CEC, Derived::Valid),
    (0x2CED, 0x2CED, Derived::Mapped),
    (0x2CEE, 0x2CF1, Derived::Valid),
    (0x2CF2, 0x2CF2, Derived::Mapped),
    (0x2CF3, 0x2CF3, Derived::Valid),
    (0x2D00, 0x2D25, Derived::Valid),
    (0x2D27, 0x2D27, Derived::Valid),
    (0x2D2D, 0x2D2D, Derived::Valid),
    (0x2D30, 0x2D67, Derived::Valid),
    (0x2D6F, 0x2D6F, Derived::Mapped),
    (0x2D7F, 0x2D96, Derived::Valid),
    (0x2DA0, 0x2DA6, Derived::Valid),
    (0x2DA8, 0x2DAE, Derived::Valid),
    (0x2DB0, 0x2DB6, Derived::Valid),
    (0x2DB8, 0x2DBE, Derived::Valid),
    (0x2DC0, 0x2DC6, Derived::Valid),
    (0x2DC8, 0x2DCE, Derived::Valid),
    (0x2DD0, 0x2DD6, Derived::Valid),
    (0x2DD8, 0x2DDE, Derived::Valid),
    (0x2DE0, 0x2DFF, Derived::Valid),
    (0x2E2F, 0x2E2F, Derived::Valid),
    (0x2E9F, 0x2E9F, Derived::Mapped),
    (0x2EF3, 0x2EF3, Derived::Mapped),
    (0x2F00, 0x2FD5, Derived::Mapped),
    (0x3000, 0x3000, Derived::Mapped),
    (0x3002, 0x3002, Derived::Mapped),
    (0x3005, 0x3007, Derived::Valid),
    (0x302A, 0x302D, Derived::Valid),
    (0x3036, 0x3036, Derived::Mapped),
    (0x3038, 0x303A, Derived::Mapped),
    (0x303C, 0x303C, Derived::Valid),
    (0x3041, 0x3096, Derived::Valid),
    (0x3099, 0x309A, Derived::Valid),
    (0x309B, 0x309C, Derived::Mapped),
    (0x309D, 0x309E, Derived::Valid),
    (0x309F, 0x309F, Derived::Mapped),
    (0x30A1, 0x30FA, Derived::Valid),
    (0x30FB, 0x30FB, Derived::Contextual),
    (0x30FC, 0x30FE, Derived::Valid),
    (0x30FF, 0x30FF, Derived::Mapped),
    (0x3105, 0x312F, Derived::Valid),
    (0x3131, 0x3163, Derived::Mapped),
    (0x3164, 0x3164, Derived::Ignored),
    (0x3165, 0x318E, Derived::Mapped),
    (0x3192, 0x319F, Derived::Mapped),
    (0x31A0, 0x31BF, Derived::Valid),
    (0x31F0, 0x31FF, Derived::Valid),
    (0x3200, 0x321E, Derived::Mapped),
    (0x3220, 0x3247, Derived::Mapped),
    (0x3250, 0x327E, Derived::Mapped),
    (0x3280, 0x33C1, Derived::Mapped),
    (0x33C3, 0x33C6, Derived::Mapped),
    (0x33C8, 0x33D7, Derived::Mapped),
    (0x33D9, 0x33FF, Derived::Mapped),
    (0x3400, 0x4DBF, Derived::Valid),
    (0x4E00, 0xA48C, Derived::Valid),
    (0xA4D0, 0xA4FD, Derived::Valid),
    (0xA500, 0xA60C, Derived::Valid),
    (0xA610, 0xA62B, Derived::Valid),
    (0xA640, 0xA640, Derived::Mapped),
    (0xA641, 0xA641, Derived::Valid),
    (0xA642, 0xA642, Derived::Mapped),
    (0xA643, 0xA643, Derived::Valid),
    (0xA644, 0xA644, Derived::Mapped),
    (0xA645, 0xA645, Derived::Valid),
    (0xA646, 0xA646, Derived::Mapped),
    (0xA647, 0xA647, Derived::Valid),
    (0xA648, 0xA648, Derived::Mapped),
    (0xA649, 0xA649, Derived::Valid),
    (0xA64A, 0xA64A, Derived::Mapped),
    (0xA64B, 0xA64B, Derived::Valid),
    (0xA64C, 0xA64C, Derived::Mapped),
    (0xA64D, 0xA64D, Derived::Valid),
    (0xA64E, 0xA64E, Derived::Mapped),
    (0xA64F, 0xA64F, Derived::Valid),
    (0xA650, 0xA650, Derived::Mapped),
    (0xA651, 0xA651, Derived::Valid),
    (0xA652, 0xA652, Derived::Mapped),
    (0xA653, 0xA653, Derived::Valid),
    (0xA654, 0xA654, Derived::Mapped),
    (0xA655, 0xA655, Derived::Valid),
    (0xA656, 0xA656, Derived::Mapped),
    (0xA657, 0xA657, Derived::Valid),
    (0xA658, 0xA658, Derived::Mapped),
    (0xA659, 0xA659, Derived::Valid),
    (0xA65A, 0xA65A, Derived::Mapped),
    (0xA65B, 0xA65B, Derived::Valid),
    (0xA65C, 0xA65C, Derived::Mapped),
    (0xA65D, 0xA65D, Derived::Valid),
    (0xA65E, 0xA65E, Derived::Mapped),
    (0xA65F, 0xA65F, Derived::Valid),
    (0xA660, 0xA660, Derived::Mapped),
    (0xA661, 0xA661, Derived::Valid),
    (0xA662, 0xA662, Derived::Mapped),
    (0xA663, 0xA663, Derived::Valid),
    (0xA664, 0xA664, Derived::Mapped),
    (0xA665, 0xA665, Derived::Valid),
    (0xA666, 0xA666, Derived::Mapped),
    (0xA667, 0xA667, Derived::Valid),
    (0xA668, 0xA668, Derived::Mapped),
    (0xA669, 0xA669, Derived::Valid),
    (0xA66A, 0xA66A, Derived::Mapped),
    (0xA66B, 0xA66B, Derived::Valid),
    (0xA66C, 0xA66C, Derived::Mapped),
    (0xA66D, 0xA66F, Derived::Valid),
    (0xA674, 0xA67D, Derived::Valid),
    (0xA67F, 0xA67F, Derived::Valid),
    (0xA680, 0xA680, Derived::Mapped),
    (0xA681, 0xA681, Derived::Valid),
    (0xA682, 0xA682, Derived::Mapped),
    (0xA683, 0xA683, Derived::Valid),
    (0xA684, 0xA684, Derived::Mapped),
    (0xA685, 0xA685, Derived::Valid),
    (0xA686, 0xA686, Derived::Mapped),
    (0xA687, 0xA687, Derived::Valid),
    (0xA688, 0xA688, Derived::Mapped),
    (0xA689, 0xA689, Derived::Valid),
    (0xA68A, 0xA68A, Derived::Mapped),
    (0xA68B, 0xA68B, Derived::Valid),
    (0xA68C, 0xA68C, Derived::Mapped),
    (0xA68D, 0xA68D, Derived::Valid),
    (0xA68E, 0xA68E, Derived::Mapped),
    (0xA68F, 0xA68F, Derived::Valid),
    (0xA690, 0xA690, Derived::Mapped),
    (0xA691, 0xA691, Derived::Valid),
    (0xA692, 0xA692, Derived::Mapped),
    (0xA693, 0xA693, Derived::Valid),
    (0xA694, 0xA694, Derived::Mapped),
    (0xA695, 0xA695, Derived::Valid),
    (0xA696, 0xA696, Derived::Mapped),
    (0xA697, 0xA697, Derived::Valid),
    (0xA698, 0xA698, Derived::Mapped),
    (0xA699, 0xA699, Derived::Valid),
    (0xA69A, 0xA69A, Derived::Mapped),
    (0xA69B, 0xA69B, Derived::Valid),
    (0xA69C, 0xA69D, Derived::Mapped),
    (0xA69E, 0xA6E5, Derived::Valid),
    (0xA6F0, 0xA6F1, Derived::Valid),
    (0xA717, 0xA71F, Derived::Valid),
    (0xA722, 0xA722, Derived::Mapped),
    (0xA723, 0xA723, Derived::Valid),
    (0xA724, 0xA724, Derived::Mapped),
    (0xA725, 0xA725, Derived::Valid),
    (0xA726, 0xA726, Derived::Mapped),
    (0xA727, 0xA727, Derived::Valid),
    (0xA728, 0xA728, Derived::Mapped),
    (0xA729, 0xA729, Derived::Valid),
    (0xA72A, 0xA72A, Derived::Mapped),
    (0xA72B, 0xA72B, Derived::Valid),
    (0xA72C, 0xA72C, Derived::Mapped),
    (0xA72D, 0xA72D, Derived::Valid),
    (0xA72E, 0xA72E, Derived::Mapped),
    (0xA72F, 0xA731, Derived::Valid),
    (0xA732, 0xA732, Derived::Mapped),
    (0xA733, 0xA733, Derived::Valid),
    (0xA734, 0xA734, Derived::Mapped),
    (0xA735, 0xA735, Derived::Valid),
    (0xA736, 0xA736, Derived::Mapped),
    (0xA737, 0xA737, Derived::Valid),
    (0xA738, 0xA738, Derived::Mapped),
    (0xA739, 0xA739, Derived::Valid),
    (0xA73A, 0xA73A, Derived::Mapped),
    (0xA73B, 0xA73B, Derived::Valid),
    (0xA73C, 0xA73C, Derived::Mapped),
    (0xA73D, 0xA73D, Derived::Valid),
    (0xA73E, 0xA73E, Derived::Mapped),
    (0xA73F, 0xA73F, Derived::Valid),
    (0xA740, 0xA740, Derived::Mapped),
    (0xA741, 0xA741, Derived::Valid),
    (0xA742, 0xA742, Derived::Mapped),
    (0xA743, 0xA743, Derived::Valid),
    (0xA744, 0xA744, Derived::Mapped),
    (0xA745, 0xA745, Derived::Valid),
    (0xA746, 0xA746, Derived::Mapped),
    (0xA747, 0xA747, Derived::Valid),
    (0xA748, 0xA748, Derived::Mapped),
    (0xA749, 0xA749, Derived::Valid),
    (0xA74A, 0xA74A, Derived::Mapped),
    (0xA74B, 0xA74B, Derived::Valid),
    (0xA74C, 0xA74C, Derived::Mapped),
    (0xA74D, 0xA74D, Derived::Valid),
    (0xA74E, 0xA74E, Derived::Mapped),
    (0xA74F, 0xA74F, Derived::Valid),
    (0xA750, 0xA750, Derived::Mapped),
    (0xA751, 0xA751, Derived::Valid),
    (0xA752, 0xA752, Derived::Mapped),
    (0xA753, 0xA753, Derived::Valid),
    (0xA754, 0xA754, Derived::Mapped),
    (0xA755, 0xA755, Derived::Valid),
    (0xA756, 0xA756, Derived::Mapped),
    (0xA757, 0xA757, Derived::Valid),
    (0xA758, 0xA758, Derived::Mapped),
    (0xA759, 0xA759, Derived::Valid),
    (0xA75A, 0xA75A, Derived::Mapped),
    (0xA75B, 0xA75B, Derived::Valid),
    (0xA75C, 0xA75C, Derived::Mapped),
    (0xA75D, 0xA75D, Derived::Valid),
    (0xA75E, 0xA75E, Derived::Mapped),
    (0xA75F, 0xA75F, Derived::Valid),
    (0xA760, 0xA760, Derived::Mapped),
    (0xA761, 0xA761, Derived::Valid),
    (0xA762, 0xA762, Derived::Mapped),
    (0xA763, 0xA763, Derived::Valid),
    (0xA764, 0xA764, Derived::Mapped),
    (0xA765, 0xA765, Derived::Valid),
    (0xA766, 0xA766, Derived::Mapped),
    (0xA767, 0xA767, Derived::Valid),
    (0xA768, 0xA768, Derived::Mapped),
    (0xA769, 0xA769, Derived::Valid),
    (0xA76A, 0xA76A, Derived::Mapped),
    (0xA76B, 0xA76B, Derived::Valid),
    (0xA76C, 0xA76C, Derived::Mapped),
    (0xA76D, 0xA76D, Derived::Valid),
    (0xA76E, 0xA76E, Derived::Mapped),
    (0xA76F, 0xA76F, Derived::Valid),
    (0xA770, 0xA770, Derived::Mapped),
    (0xA771, 0xA778, Derived::Valid),
    (0xA779, 0xA779, Derived::Mapped),
    (0xA77A, 0xA77A, Derived::Valid),
    (0xA77B, 0xA77B, Derived::Mapped),
    (0xA77C, 0xA77C, Derived::Valid),
    (0xA77D, 0xA77E, Derived::Mapped),
    (0xA77F, 0xA77F, Derived::Valid),
    (0xA780, 0xA780, Derived::Mapped),
    (0xA781, 0xA781, Derived::Valid),
    (0xA782, 0xA782, Derived::Mapped),
    (0xA783, 0xA783, Derived::Valid),
    (0xA784, 0xA784, Derived::Mapped),
    (0xA785, 0xA785, Derived::Valid),
    (0xA786, 0xA786, Derived::Mapped),
    (0xA787, 0xA788, Derived::Valid),
    (0xA78B, 0xA78B, Derived::Mapped),
    (0xA78C, 0xA78C, Derived::Valid),
    (0xA78D, 0xA78D, Derived::Mapped),
    (0xA78E, 0xA78F, Derived::Valid),
    (0xA790, 0xA790, Derived::Mapped),
    (0xA791, 0xA791, Derived::Valid),
    (0xA792, 0xA792, Derived::Mapped),
    (0xA793, 0xA795, Derived::Valid),
    (0xA796, 0xA796, Derived::Mapped),
    (0xA797, 0xA797, Derived::Valid),
    (0xA798, 0xA798, Derived::Mapped),
    (0xA799, 0xA799, Derived::Valid),
    (0xA79A, 0xA79A, Derived::Mapped),
    (0xA79B, 0xA79B, Derived::Valid),
    (0xA79C, 0xA79C, Derived::Mapped),
    (0xA79D, 0xA79D, Derived::Valid),
    (0xA79E, 0xA79E, Derived::Mapped),
    (0xA79F, 0xA79F, Derived::Valid),
    (0xA7A0, 0xA7A0, Derived::Mapped),
    (0xA7A1, 0xA7A1, Derived::Valid),
    (0xA7A2, 0xA7A2, Derived::Mapped),
    (0xA7A3, 0xA7A3, Derived::Valid),
    (0xA7A4, 0xA7A4, Derived::Mapped),
    (0xA7A5, 0xA7A5, Derived::Valid),
    (0xA7A6, 0xA7A6, Derived::Mapped),
    (0xA7A7, 0xA7A7, Derived::Valid),
    (0xA7A8, 0xA7A8, Derived::Mapped),
    (0xA7A9, 0xA7A9, Derived::Valid),
    (0xA7AA, 0xA7AE, Derived::Mapped),
    (0xA7AF, 0xA7AF, Derived::Valid),
    (0xA7B0, 0xA7B4, Derived::Mapped),
    (0xA7B5, 0xA7B5, Derived::Valid),
    (0xA7B6, 0xA7B6, Derived::Mapped),
    (0xA7B7, 0xA7B7, Derived::Valid),
    (0xA7B8, 0xA7B8, Derived::Mapped),
    (0xA7B9, 0xA7B9, Derived::Valid),
    (0xA7BA, 0xA7BA, Derived::Mapped),
    (0xA7BB, 0xA7BB, Derived::Valid),
    (0xA7BC, 0xA7BC, Derived::Mapped),
    (0xA7BD, 0xA7BD, Derived::Valid),
    (0xA7BE, 0xA7BE, Derived::Mapped),
    (0xA7BF, 0xA7BF, Derived::Valid),
    (0xA7C0, 0xA7C0, Derived::Mapped),
    (0xA7C1, 0xA7C1, Derived::Valid),
    (0xA7C2, 0xA7C2, Derived::Mapped),
    (0xA7C3, 0xA7C3, Derived::Valid),
    (0xA7C4, 0xA7C7, Derived::Mapped),
    (0xA7C8, 0xA7C8, Derived::Valid),
    (0xA7C9, 0xA7C9, Derived::Mapped),
    (0xA7CA, 0xA7CA, Derived::Valid),
    (0xA7CB, 0xA7CC, Derived::Mapped),
    (0xA7CD, 0xA7CD, Derived::Valid),
    (0xA7CE, 0xA7CE, Derived::Mapped),
    (0xA7CF, 0xA7CF, Derived::Valid),
    (0xA7D0, 0xA7D0, Derived::Mapped),
    (0xA7D1, 0xA7D1, Derived::Valid),
    (0xA7D2, 0xA7D2, Derived::Mapped),
    (0xA7D3, 0xA7D3, Derived::Valid),
    (0xA7D4, 0xA7D4, Derived::Mapped),
    (0xA7D5, 0xA7D5, Derived::Valid),
    (0xA7D6, 0xA7D6, Derived::Mapped),
    (0xA7D7, 0xA7D7, Derived::Valid),
    (0xA7D8, 0xA7D8, Derived::Mapped),
    (0xA7D9, 0xA7D9, Derived::Valid),
    (0xA7DA, 0xA7DA, Derived::Mapped),
    (0xA7DB, 0xA7DB, Derived::Valid),
    (0xA7DC, 0xA7DC, Derived::Mapped),
    (0xA7F1, 0xA7F5, Derived::Mapped),
    (0xA7F6, 0xA7F7, Derived::Valid),
    (0xA7F8, 0xA7F9, Derived::Mapped),
    (0xA7FA, 0xA827, Derived::Valid),
    (0xA82C, 0xA82C, Derived::Valid),
    (0xA840, 0xA873, Derived::Valid),
    (0xA880, 0xA8C5, Derived::Valid),
    (0xA8D0, 0xA8D9, Derived::Valid),
    (0xA8E0, 0xA8F7, Derived::Valid),
    (0xA8FB, 0xA8FB, Derived::Valid),
    (0xA8FD, 0xA92D, Derived::Valid),
    (0xA930, 0xA953, Derived::Valid),
    (0xA980, 0xA9C0, Derived::Valid),
    (0xA9CF, 0xA9D9, Derived::Valid),
    (0xA9E0, 0xA9FE, Derived::Valid),
    (0xAA00, 0xAA36, Derived::Valid),
    (0xAA40, 0xAA4D, Derived::Valid),
    (0xAA50, 0xAA59, Derived::Valid),
    (0xAA60, 0xAA76, Derived::Valid),
    (0xAA7A, 0xAAC2, Derived::Valid),
    (0xAADB, 0xAADD, Derived::Valid),
    (0xAAE0, 0xAAEF, Derived::Valid),
    (0xAAF2, 0xAAF6, Derived::Valid),
    (0xAB01, 0xAB06, Derived::Valid),
    (0xAB09, 0xAB0E, Derived::Valid),
    (0xAB11, 0xAB16, Derived::Valid),
    (0xAB20, 0xAB26, Derived::Valid),
    (0xAB28, 0xAB2E, Derived::Valid),
    (0xAB30, 0xAB5A, Derived::Valid),
    (0xAB5C, 0xAB5F, Derived::Mapped),
    (0xAB60, 0xAB68, Derived::Valid),
    (0xAB69, 0xAB69, Derived::Mapped),
    (0xAB70, 0xABBF, Derived::Mapped),
    (0xABC0, 0xABEA, Derived::Valid),
    (0xABEC, 0xABED, Derived::Valid),
    (0xABF0, 0xABF9, Derived::Valid),
    (0xAC00, 0xD7A3, Derived::Valid),
    (0xF900, 0xFA0D, Derived::Mapped),
    (0xFA0E, 0xFA0F, Derived::Valid),
    (0xFA10, 0xFA10, Derived::Mapped),
    (0xFA11, 0xFA11, Derived::Valid),
    (0xFA12, 0xFA12, Derived::Mapped),
    (0xFA13, 0xFA14, Derived::Valid),
    (0xFA15, 0xFA1E, Derived::Mapped),
    (0xFA1F, 0xFA1F, Derived::Valid),
    (0xFA20, 0xFA20, Derived::Mapped),
    (0xFA21, 0xFA21, Derived::Valid),
    (0xFA22, 0xFA22, Derived::Mapped),
    (0xFA23, 0xFA24, Derived::Valid),
    (0xFA25, 0xFA26, Derived::Mapped),
    (0xFA27, 0xFA29, Derived::Valid),
    (0xFA2A, 0xFA6D, Derived::Mapped),
    (0xFA70, 0xFAD9, Derived::Mapped),
    (0xFB00, 0xFB06, Derived::Mapped),
    (0xFB13, 0xFB17, Derived::Mapped),
    (0xFB1D, 0xFB1D, Derived::Mapped),
    (0xFB1E, 0xFB1E, Derived::Valid),
    (0xFB1F, 0xFB36, Derived::Mapped),
    (0xFB38, 0xFB3C, Derived::Mapped),
    (0xFB3E, 0xFB3E, Derived::Mapped),
    (0xFB40, 0xFB41, Derived::Mapped),
    (0xFB43, 0xFB44, Derived::Mapped),
    (0xFB46, 0xFBB1, Derived::Mapped),
    (0xFBD3, 0xFD3D, Derived::Mapped),
    (0xFD50, 0xFD8F, Derived::Mapped),
    (0xFD92, 0xFDC7, Derived::Mapped),
    (0xFDF0, 0xFDFC, Derived::Mapped),
    (0xFE00, 0xFE0F, Derived::Ignored),
    (0xFE10, 0xFE11, Derived::Mapped),
    (0xFE13, 0xFE18, Derived::Mapped),
    (0xFE20, 0xFE2F, Derived::Valid),
    (0xFE31, 0xFE44, Derived::Mapped),
    (0xFE47, 0xFE51, Derived::Mapped),
    (0xFE54, 0xFE66, Derived::Mapped),
    (0xFE68, 0xFE6B, Derived::Mapped),
    (0xFE70, 0xFE72, Derived::Mapped),
    (0xFE73, 0xFE73, Derived::Valid),
    (0xFE74, 0xFE74, Derived::Mapped),
    (0xFE76, 0xFEFC, Derived::Mapped),
    (0xFEFF, 0xFEFF, Derived::Ignored),
    (0xFF01, 0xFF9F, Derived::Mapped),
    (0xFFA0, 0xFFA0, Derived::Ignored),
    (0xFFA1, 0xFFBE, Derived::Mapped),
    (0xFFC2, 0xFFC7, Derived::Mapped),
    (0xFFCA, 0xFFCF, Derived::Mapped),
    (0xFFD2, 0xFFD7, Derived::Mapped),
    (0xFFDA, 0xFFDC, Derived::Mapped),
    (0xFFE0, 0xFFE6, Derived::Mapped),
    (0xFFE8, 0xFFEE, Derived::Mapped),
    (0x10000, 0x1000B, Derived::Valid),
    (0x1000D, 0x10026, Derived::Valid),
    (0x10028, 0x1003A, Derived::Valid),
    (0x1003C, 0x1003D, Derived::Valid),
    (0x1003F, 0x1004D, Derived::Valid),
    (0x10050, 0x1005D, Derived::Valid),
    (0x10080, 0x100FA, Derived::Valid),
    (0x101FD, 0x101FD, Derived::Valid),
    (0x10280, 0x1029C, Derived::Valid),
    (0x102A0, 0x102D0, Derived::Valid),
    (0x102E0, 0x102E0, Derived::Valid),
    (0x10300, 0x1031F, Derived::Valid),
    (0x1032D, 0x10340, Derived::Valid),
    (0x10342, 0x10349, Derived::Valid),
    (0x10350, 0x1037A, Derived::Valid),
    (0x10380, 0x1039D, Derived::Valid),
    (0x103A0, 0x103C3, Derived::Valid),
    (0x103C8, 0x103CF, Derived::Valid),
    (0x10400, 0x10427, Derived::Mapped),
    (0x10428, 0x1049D, Derived::Valid),
    (0x104A0, 0x104A9, Derived::Valid),
    (0x104B0, 0x104D3, Derived::Mapped),
    (0x104D8, 0x104FB, Derived::Valid),
    (0x10500, 0x10527, Derived::Valid),
    (0x10530, 0x10563, Derived::Valid),
    (0x10570, 0x1057A, Derived::Mapped),
    (0x1057C, 0x1058A, Derived::Mapped),
    (0x1058C, 0x10592, Derived::Mapped),
    (0x10594, 0x10595, Derived::Mapped),
    (0x10597, 0x105A1, Derived::Valid),
    (0x105A3, 0x105B1, Derived::Valid),
    (0x105B3, 0x105B9, Derived::Valid),
    (0x105BB, 0x105BC, Derived::Valid),
    (0x105C0, 0x105F3, Derived::Valid),
    (0x10600, 0x10736, Derived::Valid),
    (0x10740, 0x10755, Derived::Valid),
    (0x10760, 0x10767, Derived::Valid),
    (0x10780, 0x10780, Derived::Valid),
    (0x10781, 0x10785, Derived::Mapped),
    (0x10787, 0x107B0, Derived::Mapped),
    (0x107B2, 0x107BA, Derived::Mapped),
    (0x10800, 0x10805, Derived::Valid),
    (0x10808, 0x10808, Derived::Valid),
    (0x1080A, 0x10835, Derived::Valid),
    (0x10837, 0x10838, Derived::Valid),
    (0x1083C, 0x1083C, Derived::Valid),
    (0x1083F, 0x10855, Derived::Valid),
    (0x10860, 0x10876, Derived::Valid),
    (0x10880, 0x1089E, Derived::Valid),
    (0x108E0, 0x108F2, Derived::Valid),
    (0x108F4, 0x108F5, Derived::Valid),
    (0x10900, 0x10915, Derived::Valid),
    (0x10920, 0x10939, Derived::Valid),
    (0x10940, 0x10959, Derived::Valid),
    (0x10980, 0x109B7, Derived::Valid),
    (0x109BE, 0x109BF, Derived::Valid),
    (0x10A00, 0x10A03, Derived::Valid),
    (0x10A05, 0x10A06, Derived::Valid),
    (0x10A0C, 0x10A13, Derived::Valid),
    (0x10A15, 0x10A17, Derived::Valid),
    (0x10A19, 0x10A35, Derived::Valid),
    (0x10A38, 0x10A3A, Derived::Valid),
    (0x10A3F, 0x10A3F, Derived::Valid),
    (0x10A60, 0x10A7C, Derived::Valid),
    (0x10A80, 0x10A9C, Derived::Valid),
    (0x10AC0, 0x10AC7, Derived::Valid),
    (0x10AC9, 0x10AE6, Derived::Valid),
    (0x10B00, 0x10B35, Derived::Valid),
    (0x10B40, 0x10B55, Derived::Valid),
    (0x10B60, 0x10B72, Derived::Valid),
    (0x10B80, 0x10B91, Derived::Valid),
    (0x10C00, 0x10C48, Derived::Valid),
    (0x10C80, 0x10CB2, Derived::Mapped),
    (0x10CC0, 0x10CF2, Derived::Valid),
    (0x10D00, 0x10D27, Derived::Valid),
    (0x10D30, 0x10D39, Derived::Valid),
    (0x10D40, 0x10D4F, Derived::Valid),
    (0x10D50, 0x10D65, Derived::Mapped),
    (0x10D69, 0x10D6D, Derived::Valid),
    (0x10D6F, 0x10D85, Derived::Valid),
    (0x10E80, 0x10EA9, Derived::Valid),
    (0x10EAB, 0x10EAC, Derived::Valid),
    (0x10EB0, 0x10EB1, Derived::Valid),
    (0x10EC2, 0x10EC7, Derived::Valid),
    (0x10EFA, 0x10F1C, Derived::Valid),
    (0x10F27, 0x10F27, Derived::Valid),
    (0x10F30, 0x10F50, Derived::Valid),
    (0x10F70, 0x10F85, Derived::Valid),
    (0x10FB0, 0x10FC4, Derived::Valid),
    (0x10FE0, 0x10FF6, Derived::Valid),
    (0x11000, 0x11046, Derived::Valid),
    (0x11066, 0x11075, Derived::Valid),
    (0x1107F, 0x110BA, Derived::Valid),
    (0x110C2, 0x110C2, Derived::Valid),
    (0x110D0, 0x110E8, Derived::Valid),
    (0x110F0, 0x110F9, Derived::Valid),
    (0x11100, 0x11134, Derived::Valid),
    (0x11136, 0x1113F, Derived::Valid),
    (0x11144, 0x11147, Derived::Valid),
    (0x11150, 0x11173, Derived::Valid),
    (0x11176, 0x11176, Derived::Valid),
    (0x11180, 0x111C4, Derived::Valid),
    (0x111C9, 0x111CC, Derived::Valid),
    (0x111CE, 0x111DA, Derived::Valid),
    (0x111DC, 0x111DC, Derived::Valid),
    (0x11200, 0x11211, Derived::Valid),
    (0x11213, 0x11237, Derived::Valid),
    (0x1123E, 0x11241, Derived::Valid),
    (0x11280, 0x11286, Derived::Valid),
    (0x11288, 0x11288, Derived::Valid),
    (0x1128A, 0x1128D, Derived::Valid),
    (0x1128F, 0x1129D, Derived::Valid),
    (0x1129F, 0x112A8, Derived::Valid),
    (0x112B0, 0x112EA, Derived::Valid),
    (0x112F0, 0x112F9, Derived::Valid),
    (0x11300, 0x11303, Derived::Valid),
    (0x11305, 0x1130C, Derived::Valid),
    (0x1130F, 0x11310, Derived::Valid),
    (0x11313, 0x11328, Derived::Valid),
    (0x1132A, 0x11330, Derived::Valid),
    (0x11332, 0x11333, Derived::Valid),
    (0x11335, 0x11339, Derived::Valid),
    (0x1133B, 0x11344, Derived::Valid),
    (0x11347, 0x11348, Derived::Valid),
    (0x1134B, 0x1134D, Derived::Valid),
    (0x11350, 0x11350, Derived::Valid),
    (0x11357, 0x11357, Derived::Valid),
    (0x1135D, 0x11363, Derived::Valid),
    (0x11366, 0x1136C, Derived::Valid),
    (0x11370, 0x11374, Derived::Valid),
    (0x11380, 0x11389, Derived::Valid),
    (0x1138B, 0x1138B, Derived::Valid),
    (0x1138E, 0x1138E, Derived::Valid),
    (0x11390, 0x113B5, Derived::Valid),
    (0x113B7, 0x113C0, Derived::Valid),
    (0x113C2, 0x113C2, Derived::Valid),
    (0x113C5, 0x113C5, Derived::Valid),
    (0x113C7, 0x113CA, Derived::Valid),
    (0x113CC, 0x113D3, Derived::Valid),
    (0x113E1, 0x113E2, Derived::Valid),
    (0x11400, 0x1144A, Derived::Valid),
    (0x11450, 0x11459, Derived::Valid),
    (0x1145E, 0x11461, Derived::Valid),
    (0x11480, 0x114C5, Derived::Valid),
    (0x114C7, 0x114C7, Derived::Valid),
    (0x114D0, 0x114D9, Derived::Valid),
    (0x11580, 0x115B5, Derived::Valid),
    (0x115B8, 0x115C0, Derived::Valid),
    (0x115D8, 0x115DD, Derived::Valid),
    (0x11600, 0x11640, Derived::Valid),
    (0x11644, 0x11644, Derived::Valid),
    (0x11650, 0x11659, Derived::Valid),
    (0x11680, 0x116B8, Derived::Valid),
    (0x116C0, 0x116C9, Derived::Valid),
    (0x116D0, 0x116E3, Derived::Valid),
    (0x11700, 0x1171A, Derived::Valid),
    (0x1171D, 0x1172B, Derived::Valid),
    (0x11730, 0x11739, Derived::Valid),
    (0x11740, 0x11746, Derived::Valid),
    (0x11800, 0x1183A, Derived::Valid),
    (0x118A0, 0x118BF, Derived::Mapped),
    (0x118C0, 0x118E9, Derived::Valid),
    (0x118FF, 0x11906, Derived::Valid),
    (0x11909, 0x11909, Derived::Valid),
    (0x1190C, 0x11913, Derived::Valid),
    (0x11915, 0x11916, Derived::Valid),
    (0x11918, 0x11935, Derived::Valid),
    (0x11937, 0x11938, Derived::Valid),
    (0x1193B, 0x11943, Derived::Valid),
    (0x11950, 0x11959, Derived::Valid),
    (0x119A0, 0x119A7, Derived::Valid),
    (0x119AA, 0x119D7, Derived::Valid),
    (0x119DA, 0x119E1, Derived::Valid),
    (0x119E3, 0x119E4, Derived::Valid),
    (0x11A00, 0x11A3E, Derived::Valid),
    (0x11A47, 0x11A47, Derived::Valid),
    (0x11A50, 0x11A99, Derived::Valid),
    (0x11A9D, 0x11A9D, Derived::Valid),
    (0x11AB0, 0x11AF8, Derived::Valid),
    (0x11B60, 0x11B67, Derived::Valid),
    (0x11BC0, 0x11BE0, Derived::Valid),
    (0x11BF0, 0x11BF9, Derived::Valid),
    (0x11C00, 0x11C08, Derived::Valid),
    (0x11C0A, 0x11C36, Derived::Valid),
    (0x11C38, 0x11C40, Derived::Valid),
    (0x11C50, 0x11C59, Derived::Valid),
    (0x11C72, 0x11C8F, Derived::Valid),
    (0x11C92, 0x11CA7, Derived::Valid),
    (0x11CA9, 0x11CB6, Derived::Valid),
    (0x11D00, 0x11D06, Derived::Valid),
    (0x11D08, 0x11D09, Derived::Valid),
    (0x11D0B, 0x11D36, Derived::Valid),
    (0x11D3A, 0x11D3A, Derived::Valid),
    (0x11D3C, 0x11D3D, Derived::Valid),
    (0x11D3F, 0x11D47, Derived::Valid),
    (0x11D50, 0x11D59, Derived::Valid),
    (0x11D60, 0x11D65, Derived::Valid),
    (0x11D67, 0x11D68, Derived::Valid),
    (0x11D6A, 0x11D8E, Derived::Valid),
    (0x11D90, 0x11D91, Derived::Valid),
    (0x11D93, 0x11D98, Derived::Valid),
    (0x11DA0, 0x11DA9, Derived::Valid),
    (0x11DB0, 0x11DDB, Derived::Valid),
    (0x11DE0, 0x11DE9, Derived::Valid),
    (0x11EE0, 0x11EF6, Derived::Valid),
    (0x11F00, 0x11F10, Derived::Valid),
    (0x11F12, 0x11F3A, Derived::Valid),
    (0x11F3E, 0x11F42, Derived::Valid),
    (0x11F50, 0x11F5A, Derived::Valid),
    (0x11FB0, 0x11FB0, Derived::Valid),
    (0x12000, 0x12399, Derived::Valid),
    (0x12480, 0x12543, Derived::Valid),
    (0x12F90, 0x12FF0, Derived::Valid),
    (0x13000, 0x1342F, Derived::Valid),
    (0x13440, 0x13455, Derived::Valid),
    (0x13460, 0x143FA, Derived::Valid),
    (0x14400, 0x14646, Derived::Valid),
    (0x16100, 0x16139, Derived::Valid),
    (0x16800, 0x16A38, Derived::Valid),
    (0x16A40, 0x16A5E, Derived::Valid),
    (0x16A60, 0x16A69, Derived::Valid),
    (0x16A70, 0x16ABE, Derived::Valid),
    (0x16AC0, 0x16AC9, Derived::Valid),
    (0x16AD0, 0x16AED, Derived::Valid),
    (0x16AF0, 0x16AF4, Derived::Valid),
    (0x16B00, 0x16B36, Derived::Valid),
    (0x16B40, 0x16B43, Derived::Valid),
    (0x16B50, 0x16B59, Derived::Valid),
    (0x16B63, 0x16B77, Derived::Valid),
    (0x16B7D, 0x16B8F, Derived::Valid),
    (0x16D40, 0x16D6C, Derived::Valid),
    (0x16D70, 0x16D79, Derived::Valid),
    (0x16E40, 0x16E5F, Derived::Mapped),
    (0x16E60, 0x16E7F, Derived::Valid),
    (0x16EA0, 0x16EB8, Derived::Mapped),
    (0x16EBB, 0x16ED3, Derived::Valid),
    (0x16F00, 0x16F4A, Derived::Valid),
    (0x16F4F, 0x16F87, Derived::Valid),
    (0x16F8F, 0x16F9F, Derived::Valid),
    (0x16FE0, 0x16FE1, Derived::Valid),
    (0x16FE3, 0x16FE4, Derived::Valid),
    (0x16FF0, 0x16FF3, Derived::Valid),
    (0x17000, 0x18CD5, Derived::Valid),
    (0x18CFF, 0x18D1E, Derived::Valid),
    (0x18D80, 0x18DF2, Derived::Valid),
    (0x1AFF0, 0x1AFF3, Derived::Valid),
    (0x1AFF5, 0x1AFFB, Derived::Valid),
    (0x1AFFD, 0x1AFFE, Derived::Valid),
    (0x1B000, 0x1B122, Derived::Valid),
    (0x1B132, 0x1B132, Derived::Valid),
    (0x1B150, 0x1B152, Derived::Valid),
    (0x1B155, 0x1B155, Derived::Valid),
    (0x1B164, 0x1B167, Derived::Valid),
    (0x1B170, 0x1B2FB, Derived::Valid),
    (0x1BC00, 0x1BC6A, Derived::Valid),
    (0x1BC70, 0x1BC7C, Derived::Valid),
    (0x1BC80, 0x1BC88, Derived::Valid),
    (0x1BC90, 0x1BC99, Derived::Valid),
    (0x1BC9D, 0x1BC9E, Derived::Valid),
    (0x1BCA0, 0x1BCA3, Derived::Ignored),
    (0x1CCD6, 0x1CCF9, Derived::Mapped),
    (0x1CF00, 0x1CF2D, Derived::Valid),
    (0x1CF30, 0x1CF46, Derived::Valid),
    (0x1D15E, 0x1D164, Derived::Mapped),
    (0x1D173, 0x1D17A, Derived::Ignored),
    (0x1D1BB, 0x1D1C0, Derived::Mapped),
    (0x1D400, 0x1D454, Derived::Mapped),
    (0x1D456, 0x1D49C, Derived::Mapped),
    (0x1D49E, 0x1D49F, Derived::Mapped),
    (0x1D4A2, 0x1D4A2, Derived::Mapped),
    (0x1D4A5, 0x1D4A6, Derived::Mapped),
    (0x1D4A9, 0x1D4AC, Derived::Mapped),
    (0x1D4AE, 0x1D4B9, Derived::Mapped),
    (0x1D4BB, 0x1D4BB, Derived::Mapped),
    (0x1D4BD, 0x1D4C3, Derived::Mapped),
    (0x1D4C5, 0x1D505, Derived::Mapped),
    (0x1D507, 0x1D50A, Derived::Mapped),
    (0x1D50D, 0x1D514, Derived::Mapped),
    (0x1D516, 0x1D51C, Derived::Mapped),
    (0x1D51E, 0x1D539, Derived::Mapped),
    (0x1D53B, 0x1D53E, Derived::Mapped),
    (0x1D540, 0x1D544, Derived::Mapped),
    (0x1D546, 0x1D546, Derived::Mapped),
    (0x1D54A, 0x1D550, Derived::Mapped),
    (0x1D552, 0x1D6A5, Derived::Mapped),
    (0x1D6A8, 0x1D7CB, Derived::Mapped),
    (0x1D7CE, 0x1D7FF, Derived::Mapped),
    (0x1DA00, 0x1DA36, Derived::Valid),
    (0x1DA3B, 0x1DA6C, Derived::Valid),
    (0x1DA75, 0x1DA75, Derived::Valid),
    (0x1DA84, 0x1DA84, Derived::Valid),
    (0x1DA9B, 0x1DA9F, Derived::Valid),
    (0x1DAA1, 0x1DAAF, Derived::Valid),
    (0x1DF00, 0x1DF1E, Derived::Valid),
    (0x1DF25, 0x1DF2A, Derived::Valid),
    (0x1E000, 0x1E006, Derived::Valid),
    (0x1E008, 0x1E018, Derived::Valid),
    (0x1E01B, 0x1E021, Derived::Valid),
    (0x1E023, 0x1E024, Derived::Valid),
    (0x1E026, 0x1E02A, Derived::Valid),
    (0x1E030, 0x1E06D, Derived::Mapped),
    (0x1E08F, 0x1E08F, Derived::Valid),
    (0x1E100, 0x1E12C, Derived::Valid),
    (0x1E130, 0x1E13D, Derived::Valid),
    (0x1E140, 0x1E149, Derived::Valid),
    (0x1E14E, 0x1E14E, Derived::Valid),
    (0x1E290, 0x1E2AE, Derived::Valid),
    (0x1E2C0, 0x1E2F9, Derived::Valid),
    (0x1E4D0, 0x1E4F9, Derived::Valid),
    (0x1E5D0, 0x1E5FA, Derived::Valid),
    (0x1E6C0, 0x1E6DE, Derived::Valid),
    (0x1E6E0, 0x1E6F5, Derived::Valid),
    (0x1E6FE, 0x1E6FF, Derived::Valid),
    (0x1E7E0, 0x1E7E6, Derived::Valid),
    (0x1E7E8, 0x1E7EB, Derived::Valid),
    (0x1E7ED, 0x1E7EE, Derived::Valid),
    (0x1E7F0, 0x1E7FE, Derived::Valid),
    (0x1E800, 0x1E8C4, Derived::Valid),
    (0x1E8D0, 0x1E8D6, Derived::Valid),
    (0x1E900, 0x1E921, Derived::Mapped),
    (0x1E922, 0x1E94B, Derived::Valid),
    (0x1E950, 0x1E959, Derived::Valid),
    (0x1EE00, 0x1EE03, Derived::Mapped),
    (0x1EE05, 0x1EE1F, Derived::Mapped),
    (0x1EE21, 0x1EE22, Derived::Mapped),
    (0x1EE24, 0x1EE24, Derived::Mapped),
    (0x1EE27, 0x1EE27, Derived::Mapped),
    (0x1EE29, 0x1EE32, Derived::Mapped),
    (0x1EE34, 0x1EE37, Derived::Mapped),
    (0x1EE39, 0x1EE39, Derived::Mapped),
    (0x1EE3B, 0x1EE3B, Derived::Mapped),
    (0x1EE42, 0x1EE42, Derived::Mapped),
    (0x1EE47, 0x1EE47, Derived::Mapped),
    (0x1EE49, 0x1EE49, Derived::Mapped),
    (0x1EE4B, 0x1EE4B, Derived::Mapped),
    (0x1EE4D, 0x1EE4F, Derived::Mapped),
    (0x1EE51, 0x1EE52, Derived::Mapped),
    (0x1EE54, 0x1EE54, Derived::Mapped),
    (0x1EE57, 0x1EE57, Derived::Mapped),
    (0x1EE59, 0x1EE59, Derived::Mapped),
    (0x1EE5B, 0x1EE5B, Derived::Mapped),
    (0x1EE5D, 0x1EE5D, Derived::Mapped),
    (0x1EE5F, 0x1EE5F, Derived::Mapped),
    (0x1EE61, 0x1EE62, Derived::Mapped),
    (0x1EE64, 0x1EE64, Derived::Mapped),
    (0x1EE67, 0x1EE6A, Derived::Mapped),
    (0x1EE6C, 0x1EE72, Derived::Mapped),
    (0x1EE74, 0x1EE77, Derived::Mapped),
    (0x1EE79, 0x1EE7C, Derived::Mapped),
    (0x1EE7E, 0x1EE7E, Derived::Mapped),
    (0x1EE80, 0x1EE89, Derived::Mapped),
    (0x1EE8B, 0x1EE9B, Derived::Mapped),
    (0x1EEA1, 0x1EEA3, Derived::Mapped),
    (0x1EEA5, 0x1EEA9, Derived::Mapped),
    (0x1EEAB, 0x1EEBB, Derived::Mapped),
    (0x1F101, 0x1F10A, Derived::Mapped),
    (0x1F110, 0x1F12E, Derived::Mapped),
    (0x1F130, 0x1F14F, Derived::Mapped),
    (0x1F16A, 0x1F16C, Derived::Mapped),
    (0x1F190, 0x1F190, Derived::Mapped),
    (0x1F200, 0x1F202, Derived::Mapped),
    (0x1F210, 0x1F23B, Derived::Mapped),
    (0x1F240, 0x1F248, Derived::Mapped),
    (0x1F250, 0x1F251, Derived::Mapped),
    (0x1FBF0, 0x1FBF9, Derived::Mapped),
    (0x20000, 0x2A6DF, Derived::Valid),
    (0x2A700, 0x2B81D, Derived::Valid),
    (0x2B820, 0x2CEAD, Derived::Valid),
    (0x2CEB0, 0x2EBE0, Derived::Valid),
    (0x2EBF0, 0x2EE5D, Derived::Valid),
    (0x2F800, 0x2FA1D, Derived::Mapped),
    (0x30000, 0x3134A, Derived::Valid),
    (0x31350, 0x33479, Derived::Valid),
    (0xE0100, 0xE01EF, Derived::Ignored),
];

/// The joining types of all joining code points.
static JOINING_TYPES: &[(u32, u32, JoiningType)] = &[
    (0x00AD, 0x00AD, JoiningType::Transparent),
    (0x0300, 0x036F, JoiningType::Transparent),
    (0x0483, 0x0489, JoiningType::Transparent),
    (0x0591, 0x05BD, JoiningType::Transparent),
    (0x05BF, 0x05BF, JoiningType::Transparent),
    (0x05C1, 0x05C2, JoiningType::Transparent),
    (0x05C4, 0x05C5, JoiningType::Transparent),
    (0x05C7, 0x05C7, JoiningType::Transparent),
    (0x0610, 0x061A, JoiningType::Transparent),
    (0x061C, 0x061C, JoiningType::Transparent),
    (0x0620, 0x0620, JoiningType::Dual),
    (0x0622, 0x0625, JoiningType::Right),
    (0x0626, 0x0626, JoiningType::Dual),
    (0x0627, 0x0627, JoiningType::Right),
    (0x0628, 0x0628, JoiningType::Dual),
    (0x0629, 0x0629, JoiningType::Right),
    (0x062A, 0x062E, JoiningType::Dual),
    (0x062F, 0x0632, JoiningType::Right),
    (0x0633, 0x063F, JoiningType::Dual),
    (0x0640, 0x0640, JoiningType::Causing),
    (0x0641, 0x0647, JoiningType::Dual),
    (0x0648, 0x0648, JoiningType::Right),
    (0x0649, 0x064A, JoiningType::Dual),
    (0x064B, 0x065F, JoiningType::Transparent),
    (0x066E, 0x066F, JoiningType::Dual),
    (0x0670, 0x0670, JoiningType::Transparent),
    (0x0671, 0x0673, JoiningType::Right),
    (0x0675, 0x0677, JoiningType::Right),
    (0x0678, 0x0687, JoiningType::Dual),
    (0x0688, 0x0699, JoiningType::Right),
    (0x069A, 0x06BF, JoiningType::Dual),
    (0x06C0, 0x06C0, JoiningType::Right),
    (0x06C1, 0x06C2, JoiningType::Dual),
    (0x06C3, 0x06CB, JoiningType::Right),
    (0x06CC, 0x06CC, JoiningType::Dual),
    (0x06CD, 0x06CD, JoiningType::Right),
    (0x06CE, 0x06CE, JoiningType::Dual),
    (0x06CF, 0x06CF, JoiningType::Right),
    (0x06D0, 0x06D1, JoiningType::Dual),
    (0x06D2, 0x06D3, JoiningType::Right),
    (0x06D5, 0x06D5, JoiningType::Right),
    (0x06D6, 0x06DC, JoiningType::Transparent),
    (0x06DF, 0x06E4, JoiningType::Transparent),
    (0x06E7, 0x06E8, JoiningType::Transparent),
    (0x06EA, 0x06ED, JoiningType::Transparent),
    (0x06EE, 0x06EF, JoiningType::Right),
    (0x06FA, 0x06FC, JoiningType::Dual),
    (0x06FF, 0x06FF, JoiningType::Dual),
    (0x070F, 0x070F, JoiningType::Transparent),
    (0x0710, 0x0710, JoiningType::Right),
    (0x0711, 0x0711, JoiningType::Transparent),
    (0x0712, 0x0714, JoiningType::Dual),
    (0x0715, 0x0719, JoiningType::Right),
    (0x071A, 0x071D, JoiningType::Dual),
    (0x071E, 0x071E, JoiningType::Right),
    (0x071F, 0x0727, JoiningType::Dual),
    (0x0728, 0x0728, JoiningType::Right),
    (0x0729, 0x0729, JoiningType::Dual),
    (0x072A, 0x072A, JoiningType::Right),
    (0x072B, 0x072B, JoiningType::Dual),
    (0x072C, 0x072C, JoiningType::Right),
    (0x072D, 0x072E, JoiningType::Dual),
    (0x072F, 0x072F, JoiningType::Right),
    (0x0730, 0x074A, JoiningType::Transparent),
    (0x074D, 0x074D, JoiningType::Right),
    (0x074E, 0x0758, JoiningType::Dual),
    (0x0759, 0x075B, JoiningType::Right),
    (0x075C, 0x076A, JoiningType::Dual),
    (0x076B, 0x076C, JoiningType::Right),
    (0x076D, 0x0770, JoiningType::Dual),
    (0x0771, 0x0771, JoiningType::Right),
    (0x0772, 0x0772, JoiningType::Dual),
    (0x0773, 0x0774, JoiningType::Right),
    (0x0775, 0x0777, JoiningType::Dual),
    (0x0778, 0x0779, JoiningType::Right),
    (0x077A, 0x077F, JoiningType::Dual),
    (0x07A6, 0x07B0, JoiningType::Transparent),
    (0x07CA, 0x07EA, JoiningType::Dual),
    (0x07EB, 0x07F3, JoiningType::Transparent),
    (0x07FA, 0x07FA, JoiningType::Causing),
    (0x07FD, 0x07FD, JoiningType::Transparent),
    (0x0816, 0x0819, JoiningType::Transparent),
    (0x081B, 0x0823, JoiningType::Transparent),
    (0x0825, 0x0827, JoiningType::Transparent),
    (0x0829, 0x082D, JoiningType::Transparent),
    (0x0840, 0x0840, JoiningType::Right),
    (0x0841, 0x0845, JoiningType::Dual),
    (0x0846, 0x0847, JoiningType::Right),
    (0x0848, 0x0848, JoiningType::Dual),
    (0x0849, 0x0849, JoiningType::Right),
    (0x084A, 0x0853, JoiningType::Dual),
    (0x0854, 0x0854, JoiningType::Right),
    (0x0855, 0x0855, JoiningType::Dual),
    (0x0856, 0x0858, JoiningType::Right),
    (0x0859, 0x085B, JoiningType::Transparent),
    (0x0860, 0x0860, JoiningType::Dual),
    (0x0862, 0x0865, JoiningType::Dual),
    (0x0867, 0x0867, JoiningType::Right),
    (0x0868, 0x0868, JoiningType::Dual),
    (0x0869, 0x086A, JoiningType::Right),
    (0x0870, 0x0882, JoiningType::Right),
    (0x0883, 0x0885, JoiningType::Causing),
    (0x0886, 0x0886, JoiningType::Dual),
    (0x0889, 0x088D, JoiningType::Dual),
    (0x088E, 0x088E, JoiningType::Right),
    (0x088F, 0x088F, JoiningType::Dual),
    (0x0897, 0x089F, JoiningType::Transparent),
    (0x08A0, 0x08A9, JoiningType::Dual),
    (0x08AA, 0x08AC, JoiningType::Right),
    (0x08AE, 0x08AE, JoiningType::Right),
    (0x08AF, 0x08B0, JoiningType::Dual),
    (0x08B1, 0x08B2, JoiningType::Right),
    (0x08B3, 0x08B8, JoiningType::Dual),
    (0x08B9, 0x08B9, JoiningType::Right),
    (0x08BA, 0x08C8, JoiningType::Dual),
    (0x08CA, 0x08E1, JoiningType::Transparent),
    (0x08E3, 0x0902, JoiningType::Transparent),
    (0x093A, 0x093A, JoiningType::Transparent),
    (0x093C, 0x093C, JoiningType::Transparent),
    (0x0941, 0x0948, JoiningType::Transparent),
    (0x094D, 0x094D, JoiningType::Transparent),
    (0x0951, 0x0957, JoiningType::Transparent),
    (0x0962, 0x0963, JoiningType::Transparent),
    (0x0981, 0x0981, JoiningType::Transparent),
    (0x09BC, 0x09BC, JoiningType::Transparent),
    (0x09C1, 0x09C4, JoiningType::Transparent),
    (0x09CD, 0x09CD, JoiningType::Transparent),
    (0x09E2, 0x09E3, JoiningType::Transparent),
    (0x09FE, 0x09FE, JoiningType::Transparent),
    (0x0A01, 0x0A02, JoiningType::Transparent),
    (0x0A3C, 0x0A3C, JoiningType::Transparent),
    (0x0A41, 0x0A42, JoiningType::Transparent),
    (0x0A47, 0x0A48, JoiningType::Transparent),
    (0x0A4B, 0x0A4D, JoiningType::Transparent),
    (0x0A51, 0x0A51, JoiningType::Transparent),
    (0x0A70, 0x0A71, JoiningType::Transparent),
    (0x0A75, 0x0A75, JoiningType::Transparent),
    (0x0A81, 0x0A82, JoiningType::Transparent),
    (0x0ABC, 0x0ABC, JoiningType::Transparent),
    (0x0AC1, 0x0AC5, JoiningType::Transparent),
    (0x0AC7, 0x0AC8, JoiningType::Transparent),
    (0x0ACD, 0x0ACD, JoiningType::Transparent),
    (0x0AE2, 0x0AE3, JoiningType::Transparent),
    (0x0AFA, 0x0AFF, JoiningType::Transparent),
    (0x0B01, 0x0B01, JoiningType::Transparent),
    (0x0B3C, 0x0B3C, JoiningType::Transparent),
    (0x0B3F, 0x0B3F, JoiningType::Transparent),
    (0x0B41, 0x0B44, JoiningType::Transparent),
    (0x0B4D, 0x0B4D, JoiningType::Transparent),
    (0x0B55, 0x0B56, JoiningType::Transparent),
    (0x0B62, 0x0B63, JoiningType::Transparent),
    (0x0B82, 0x0B82, JoiningType::Transparent),
    (0x0BC0, 0x0BC0, JoiningType::Transparent),
    (0x0BCD, 0x0BCD, JoiningType::Transparent),
    (0x0C00, 0x0C00, JoiningType::Transparent),
    (0x0C04, 0x0C04, JoiningType::Transparent),
    (0x0C3C, 0x0C3C, JoiningType::Transparent),
    (0x0C3E, 0x0C40, JoiningType::Transparent),
    (0x0C46, 0x0C48, JoiningType::Transparent),
    (0x0C4A, 0x0C4D, JoiningType::Transparent),
    (0x0C55, 0x0C56, JoiningType::Transparent),
    (0x0C62, 0x0C63, JoiningType::Transparent),
    (0x0C81, 0x0C81, JoiningType::Transparent),
    (0x0CBC, 0x0CBC, JoiningType::Transparent),
    (0x0CBF, 0x0CBF, JoiningType::Transparent),
    (0x0CC6, 0x0CC6, JoiningType::Transparent),
    (0x0CCC, 0x0CCD, JoiningType::Transparent),
    (0x0CE2, 0x0CE3, JoiningType::Transparent),
    (0x0D00, 0x0D01, JoiningType::Transparent),
    (0x0D3B, 0x0D3C, JoiningType::Transparent),
    (0x0D41, 0x0D44, JoiningType::Transparent),
    (0x0D4D, 0x0D4D, JoiningType::Transparent),
    (0x0D62, 0x0D63, JoiningType::Transparent),
    (0x0D81, 0x0D81, JoiningType::Transparent),
    (0x0DCA, 0x0DCA, JoiningType::Transparent),
    (0x0DD2, 0x0DD4, JoiningType::Transparent),
    (0x0DD6, 0x0DD6, JoiningType::Transparent),
    (0x0E31, 0x0E31, JoiningType::Transparent),
    (0x0E34, 0x0E3A, JoiningType::Transparent),
    (0x0E47, 0x0E4E, JoiningType::Transparent),
    (0x0EB1, 0x0EB1, JoiningType::Transparent),
    (0x0EB4, 0x0EBC, JoiningType::Transparent),
    (0x0EC8, 0x0ECE, JoiningType::Transparent),
    (0x0F18, 0x0F19, JoiningType::Transparent),
    (0x0F35, 0x0F35, JoiningType::Transparent),
    (0x0F37, 0x0F37, JoiningType::Transparent),
    (0x0F39, 0x0F39, JoiningType::Transparent),
    (0x0F71, 0x0F7E, JoiningType::Transparent),
    (0x0F80, 0x0F84, JoiningType::Transparent),
    (0x0F86, 0x0F87, JoiningType::Transparent),
    (0x0F8D, 0x0F97, JoiningType::Transparent),
    (0x0F99, 0x0FBC, JoiningType::Transparent),
    (0x0FC6, 0x0FC6, JoiningType::Transparent),
    (0x102D, 0x1030, JoiningType::Transparent),
    (0x1032, 0x1037, JoiningType::Transparent),
    (0x1039, 0x103A, JoiningType::Transparent),
    (0x103D, 0x103E, JoiningType::Transparent),
    (0x1058, 0x1059, JoiningType::Transparent),
    (0x105E, 0x1060, JoiningType::Transparent),
    (0x1071, 0x1074, JoiningType::Transparent),
    (0x1082, 0x1082, JoiningType::Transparent),
    (0x1085, 0x1086, JoiningType::Transparent),
    (0x108D, 0x108D, JoiningType::Transparent),
    (0x109D, 0x109D, JoiningType::Transparent),
    (0x135D, 0x135F, JoiningType::Transparent),
    (0x1712, 0x1714, JoiningType::Transparent),
    (0x1732, 0x1733, JoiningType::Transparent),
    (0x1752, 0x1753, JoiningType::Transparent),
    (0x1772, 0x1773, JoiningType::Transparent),
    (0x17B4, 0x17B5, JoiningType::Transparent),
    (0x17B7, 0x17BD, JoiningType::Transparent),
    (0x17C6, 0x17C6, JoiningType::Transparent),
    (0x17C9, 0x17D3, JoiningType::Transparent),
    (0x17DD, 0x17DD, JoiningType::Transparent),
    (0x1807, 0x1807, JoiningType::Dual),
    (0x180A, 0x180A, JoiningType::Causing),
    (0x180B, 0x180D, JoiningType::Transparent),
    (0x180F, 0x180F, JoiningType::Transparent),
    (0x1820, 0x1878, JoiningType::Dual),
    (0x1885, 0x1886, JoiningType::Transparent),
    (0x1887, 0x18A8, JoiningType::Dual),
    (0x18A9, 0x18A9, JoiningType::Transparent),
    (0x18AA, 0x18AA, JoiningType::Dual),
    (0x1920, 0x1922, JoiningType::Transparent),
    (0x1927, 0x1928, JoiningType::Transparent),
    (0x1932, 0x1932, JoiningType::Transparent),
    (0x1939, 0x193B, JoiningType::Transparent),
    (0x1A17, 0x1A18, JoiningType::Transparent),
    (0x1A1B, 0x1A1B, JoiningType::Transparent),
    (0x1A56, 0x1A56, JoiningType::Transparent),
    (0x1A58, 0x1A5E, JoiningType::Transparent),
    (0x1A60, 0x1A60, JoiningType::Transparent),
    (0x1A62, 0x1A62, JoiningType::Transparent),
    (0x1A65, 0x1A6C, JoiningType::Transparent),
    (0x1A73, 0x1A7C, JoiningType::Transparent),
    (0x1A7F, 0x1A7F, JoiningType::Transparent),
    (0x1AB0, 0x1ADD, JoiningType::Transparent),
    (0x1AE0, 0x1AEB, JoiningType::Transparent),
    (0x1B00, 0x1B03, JoiningType::Transparent),
    (0x1B34, 0x1B34, JoiningType::Transparent),
    (0x1B36, 0x1B3A, JoiningType::Transparent),
    (0x1B3C, 0x1B3C, JoiningType::Transparent),
    (0x1B42, 0x1B42, JoiningType::Transparent),
    (0x1B6B, 0x1B73, JoiningType::Transparent),
    (0x1B80, 0x1B81, JoiningType::Transparent),
    (0x1BA2, 0x1BA5, JoiningType::Transparent),
    (0x1BA8, 0x1BA9, JoiningType::Transparent),
    (0x1BAB, 0x1BAD, JoiningType::Transparent),
    (0x1BE6, 0x1BE6, JoiningType::Transparent),
    (0x1BE8, 0x1BE9, JoiningType::Transparent),
    (0x1BED, 0x1BED, JoiningType::Transparent),
    (0x1BEF, 0x1BF1, JoiningType::Transparent),
    (0x1C2C, 0x1C33, JoiningType::Transparent),
    (0x1C36, 0x1C37, JoiningType::Transparent),
    (0x1CD0, 0x1CD2, JoiningType::Transparent),
    (0x1CD4, 0x1CE0, JoiningType::Transparent),
    (0x1CE2, 0x1CE8, JoiningType::Transparent),
    (0x1CED, 0x1CED, JoiningType::Transparent),
    (0x1CF4, 0x1CF4, JoiningType::Transparent),
    (0x1CF8, 0x1CF9, JoiningType::Transparent),
    (0x1DC0, 0x1DFF, JoiningType::Transparent),
    (0x200B, 0x200B, JoiningType::Transparent),
    (0x200D, 0x200D, JoiningType::Causing),
    (0x200E, 0x200F, JoiningType::Transparent),
    (0x202A, 0x202E, JoiningType::Transparent),
    (0x2060, 0x2064, JoiningType::Transparent),
    (0x206A, 0x206F, JoiningType::Transparent),
    (0x20D0, 0x20F0, JoiningType::Transparent),
    (0x2CEF, 0x2CF1, JoiningType::Transparent),
    (0x2D7F, 0x2D7F, JoiningType::Transparent),
    (0x2DE0, 0x2DFF, JoiningType::Transparent),
    (0x302A, 0x302D, JoiningType::Transparent),
    (0x3099, 0x309A, JoiningType::Transparent),
    (0xA66F, 0xA672, JoiningType::Transparent),
    (0xA674, 0xA67D, JoiningType::Transparent),
    (0xA69E, 0xA69F, JoiningType::Transparent),
    (0xA6F0, 0xA6F1, JoiningType::Transparent),
    (0xA802, 0xA802, JoiningType::Transparent),
    (0xA806, 0xA806, JoiningType::Transparent),
    (0xA80B, 0xA80B, JoiningType::Transparent),
    (0xA825, 0xA826, JoiningType::Transparent),
    (0xA82C, 0xA82C, JoiningType::Transparent),
    (0xA840, 0xA871, JoiningType::Dual),
    (0xA872, 0xA872, JoiningType::Left),
    (0xA8C4, 0xA8C5, JoiningType::Transparent),
    (0xA8E0, 0xA8F1, JoiningType::Transparent),
    (0xA8FF, 0xA8FF, JoiningType::Transparent),
    (0xA926, 0xA92D, JoiningType::Transparent),
    (0xA947, 0xA951, JoiningType::Transparent),
    (0xA980, 0xA982, JoiningType::Transparent),
    (0xA9B3, 0xA9B3, JoiningType::Transparent),
    (0xA9B6, 0xA9B9, JoiningType::Transparent),
    (0xA9BC, 0xA9BD, JoiningType::Transparent),
    (0xA9E5, 0xA9E5, JoiningType::Transparent),
    (0xAA29, 0xAA2E, JoiningType::Transparent),
    (0xAA31, 0xAA32, JoiningType::Transparent),
    (0xAA35, 0xAA36, JoiningType::Transparent),
    (0xAA43, 0xAA43, JoiningType::Transparent),
    (0xAA4C, 0xAA4C, JoiningType::Transparent),
    (0xAA7C, 0xAA7C, JoiningType::Transparent),
    (0xAAB0, 0xAAB0, JoiningType::Transparent),
    (0xAAB2, 0xAAB4, JoiningType::Transparent),
    (0xAAB7, 0xAAB8, JoiningType::Transparent),
    (0xAABE, 0xAABF, JoiningType::Transparent),
    (0xAAC1, 0xAAC1, JoiningType::Transparent),
    (0xAAEC, 0xAAED, JoiningType::Transparent),
    (0xAAF6, 0xAAF6, JoiningType::Transparent),
    (0xABE5, 0xABE5, JoiningType::Transparent),
    (0xABE8, 0xABE8, JoiningType::Transparent),
    (0xABED, 0xABED, JoiningType::Transparent),
    (0xFB1E, 0xFB1E, JoiningType::Transparent),
    (0xFE00, 0xFE0F, JoiningType::Transparent),
    (0xFE20, 0xFE2F, JoiningType::Transparent),
    (0xFEFF, 0xFEFF, JoiningType::Transparent),
    (0xFFF9, 0xFFFB, JoiningType::Transparent),
    (0x101FD, 0x101FD, JoiningType::Transparent),
    (0x102E0, 0x102E0, JoiningType::Transparent),
    (0x10376, 0x1037A, JoiningType::Transparent),
    (0x10A01, 0x10A03, JoiningType::Transparent),
    (0x10A05, 0x10A06, JoiningType::Transparent),
    (0x10A0C, 0x10A0F, JoiningType::Transparent),
    (0x10A38, 0x10A3A, JoiningType::Transparent),
    (0x10A3F, 0x10A3F, JoiningType::Transparent),
    (0x10AC0, 0x10AC4, JoiningType::Dual),
    (0x10AC5, 0x10AC5, JoiningType::Right),
    (0x10AC7, 0x10AC7, JoiningType::Right),
    (0x10AC9, 0x10ACA, JoiningType::Right),
    (0x10ACD, 0x10ACD, JoiningType::Left),
    (0x10ACE, 0x10AD2, JoiningType::Right),
    (0x10AD3, 0x10AD6, JoiningType::Dual),
    (0x10AD7, 0x10AD7, JoiningType::Left),
    (0x10AD8, 0x10ADC, JoiningType::Dual),
    (0x10ADD, 0x10ADD, JoiningType::Right),
    (0x10ADE, 0x10AE0, JoiningType::Dual),
    (0x10AE1, 0x10AE1, JoiningType::Right),
    (0x10AE4, 0x10AE4, JoiningType::Right),
    (0x10AE5, 0x10AE6, JoiningType::Transparent),
    (0x10AEB, 0x10AEE, JoiningType::Dual),
    (0x10AEF, 0x10AEF, JoiningType::Right),
    (0x10B80, 0x10B80, JoiningType::Dual),
    (0x10B81, 0x10B81, JoiningType::Right),
    (0x10B82, 0x10B82, JoiningType::Dual),
    (0x10B83, 0x10B85, JoiningType::Right),
    (0x10B86, 0x10B88, JoiningType::Dual),
    (0x10B89, 0x10B89, JoiningType::Right),
    (0x10B8A, 0x10B8B, JoiningType::Dual),
    (0x10B8C, 0x10B8C, JoiningType::Right),
    (0x10B8D, 0x10B8D, JoiningType::Dual),
    (0x10B8E, 0x10B8F, JoiningType::Right),
    (0x10B90, 0x10B90, JoiningType::Dual),
    (0x10B91, 0x10B91, JoiningType::Right),
    (0x10BA9, 0x10BAC, JoiningType::Right),
    (0x10BAD, 0x10BAE, JoiningType::Dual),
    (0x10D00, 0x10D00, JoiningType::Left),
    (0x10D01, 0x10D21, JoiningType::Dual),
    (0x10D22, 0x10D22, JoiningType::Right),
    (0x10D23, 0x10D23, JoiningType::Dual),
    (0x10D24, 0x10D27, JoiningType::Transparent),
    (0x10D69, 0x10D6D, JoiningType::Transparent),
    (0x10EAB, 0x10EAC, JoiningType::Transparent),
    (0x10EC2, 0x10EC2, JoiningType::Right),
    (0x10EC3, 0x10EC4, JoiningType::Dual),
    (0x10EC6, 0x10EC7, JoiningType::Dual),
    (0x10EFA, 0x10EFF, JoiningType::Transparent),
    (0x10F30, 0x10F32, JoiningType::Dual),
    (0x10F33, 0x10F33, JoiningType::Right),
    (0x10F34, 0x10F44, JoiningType::Dual),
    (0x10F46, 0x10F50, JoiningType::Transparent),
    (0x10F51, 0x10F53, JoiningType::Dual),
    (0x10F54, 0x10F54, JoiningType::Right),
    (0x10F70, 0x10F73, JoiningType::Dual),
    (0x10F74, 0x10F75, JoiningType::Right),
    (0x10F76, 0x10F81, JoiningType::Dual),
    (0x10F82, 0x10F85, JoiningType::Transparent),
    (0x10FB0, 0x10FB0, JoiningType::Dual),
    (0x10FB2, 0x10FB3, JoiningType::Dual),
    (0x10FB4, 0x10FB6, JoiningType::Right),
    (0x10FB8, 0x10FB8, JoiningType::Dual),
    (0x10FB9, 0x10FBA, JoiningType::Right),
    (0x10FBB, 0x10FBC, JoiningType::Dual),
    (0x10FBD, 0x10FBD, JoiningType::Right),
    (0x10FBE, 0x10FBF, JoiningType::Dual),
    (0x10FC1, 0x10FC1, JoiningType::Dual),
    (0x10FC2, 0x10FC3, JoiningType::Right),
    (0x10FC4, 0x10FC4, JoiningType::Dual),
    (0x10FC9, 0x10FC9, JoiningType::Right),
    (0x10FCA, 0x10FCA, JoiningType::Dual),
    (0x10FCB, 0x10FCB, JoiningType::Left),
    (0x11001, 0x11001, JoiningType::Transparent),
    (0x11038, 0x11046, JoiningType::Transparent),
    (0x11070, 0x11070, JoiningType::Transparent),
    (0x11073, 0x11074, JoiningType::Transparent),
    (0x1107F, 0x11081, JoiningType::Transparent),
    (0x110B3, 0x110B6, JoiningType::Transparent),
    (0x110B9, 0x110BA, JoiningType::Transparent),
    (0x110C2, 0x110C2, JoiningType::Transparent),
    (0x11100, 0x11102, JoiningType::Transparent),
    (0x11127, 0x1112B, JoiningType::Transparent),
    (0x1112D, 0x11134, JoiningType::Transparent),
    (0x11173, 0x11173, JoiningType::Transparent),
    (0x11180, 0x11181, JoiningType::Transparent),
    (0x111B6, 0x111BE, JoiningType::Transparent),
    (0x111C9, 0x111CC, JoiningType::Transparent),
    (0x111CF, 0x111CF, JoiningType::Transparent),
    (0x1122F, 0x11231, JoiningType::Transparent),
    (0x11234, 0x11234, JoiningType::Transparent),
    (0x11236, 0x11237, JoiningType::Transparent),
    (0x1123E, 0x1123E, JoiningType::Transparent),
    (0x11241, 0x11241, JoiningType::Transparent),
    (0x112DF, 0x112DF, JoiningType::Transparent),
    (0x112E3, 0x112EA, JoiningType::Transparent),
    (0x11300, 0x11301, JoiningType::Transparent),
    (0x1133B, 0x1133C, JoiningType::Transparent),
    (0x11340, 0x11340, JoiningType::Transparent),
    (0x11366, 0x1136C, JoiningType::Transparent),
    (0x11370, 0x11374, JoiningType::Transparent),
    (0x113BB, 0x113C0, JoiningType::Transparent),
    (0x113CE, 0x113CE, JoiningType::Transparent),
    (0x113D0, 0x113D0, JoiningType::Transparent),
    (0x113D2, 0x113D2, JoiningType::Transparent),
    (0x113E1, 0x113E2, JoiningType::Transparent),
    (0x11438, 0x1143F, JoiningType::Transparent),
    (0x11442, 0x11444, JoiningType::Transparent),
    (0x11446, 0x11446, JoiningType::Transparent),
    (0x1145E, 0x1145E, JoiningType::Transparent),
    (0x114B3, 0x114B8, JoiningType::Transparent),
    (0x114BA, 0x114BA, JoiningType::Transparent),
    (0x114BF, 0x114C0, JoiningType::Transparent),
    (0x114C2, 0x114C3, JoiningType::Transparent),
    (0x115B2, 0x115B5, JoiningType::Transparent),
    (0x115BC, 0x115BD, JoiningType::Transparent),
    (0x115BF, 0x115C0, JoiningType::Transparent),
    (0x115DC, 0x115DD, JoiningType::Transparent),
    (0x11633, 0x1163A, JoiningType::Transparent),
    (0x1163D, 0x1163D, JoiningType::Transparent),
    (0x1163F, 0x11640, JoiningType::Transparent),
    (0x116AB, 0x116AB, JoiningType::Transparent),
    (0x116AD, 0x116AD, JoiningType::Transparent),
    (0x116B0, 0x116B5, JoiningType::Transparent),
    (0x116B7, 0x116B7, JoiningType::Transparent),
    (0x1171D, 0x1171D, JoiningType::Transparent),
    (0x1171F, 0x1171F, JoiningType::Transparent),
    (0x11722, 0x11725, JoiningType::Transparent),
    (0x11727, 0x1172B, JoiningType::Transparent),
    (0x1182F, 0x11837, JoiningType::Transparent),
    (0x11839, 0x1183A, JoiningType::Transparent),
    (0x1193B, 0x1193C, JoiningType::Transparent),
    (0x1193E, 0x1193E, JoiningType::Transparent),
    (0x11943, 0x11943, JoiningType::Transparent),
    (0x119D4, 0x119D7, JoiningType::Transparent),
    (0x119DA, 0x119DB, JoiningType::Transparent),
    (0x119E0, 0x119E0, JoiningType::Transparent),
    (0x11A01, 0x11A0A, JoiningType::Transparent),
    (0x11A33, 0x11A38, JoiningType::Transparent),
    (0x11A3B, 0x11A3E, JoiningType::Transparent),
    (0x11A47, 0x11A47, JoiningType::Transparent),
    (0x11A51, 0x11A56, JoiningType::Transparent),
    (0x11A59, 0x11A5B, JoiningType::Transparent),
    (0x11A8A, 0x11A96, JoiningType::Transparent),
    (0x11A98, 0x11A99, JoiningType::Transparent),
    (0x11B60, 0x11B60, JoiningType::Transparent),
    (0x11B62, 0x11B64, JoiningType::Transparent),
    (0x11B66, 0x11B66, JoiningType::Transparent),
    (0x11C30, 0x11C36, JoiningType::Transparent),
    (0x11C38, 0x11C3D, JoiningType::Transparent),
    (0x11C3F, 0x11C3F, JoiningType::Transparent),
    (0x11C92, 0x11CA7, JoiningType::Transparent),
    (0x11CAA, 0x11CB0, JoiningType::Transparent),
    (0x11CB2, 0x11CB3, JoiningType::Transparent),
    (0x11CB5, 0x11CB6, JoiningType::Transparent),
    (0x11D31, 0x11D36, JoiningType::Transparent),
    (0x11D3A, 0x11D3A, JoiningType::Transparent),
    (0x11D3C, 0x11D3D, JoiningType::Transparent),
    (0x11D3F, 0x11D45, JoiningType::Transparent),
    (0x11D47, 0x11D47, JoiningType::Transparent),
    (0x11D90, 0x11D91, JoiningType::Transparent),
    (0x11D95, 0x11D95, JoiningType::Transparent),
    (0x11D97, 0x11D97, JoiningType::Transparent),
    (0x11EF3, 0x11EF4, JoiningType::Transparent),
    (0x11F00, 0x11F01, JoiningType::Transparent),
    (0x11F36, 0x11F3A, JoiningType::Transparent),
    (0x11F40, 0x11F40, JoiningType::Transparent),
    (0x11F42, 0x11F42, JoiningType::Transparent),
    (0x11F5A, 0x11F5A, JoiningType::Transparent),
    (0x13430, 0x13440, JoiningType::Transparent),
    (0x13447, 0x13455, JoiningType::Transparent),
    (0x1611E, 0x16129, JoiningType::Transparent),
    (0x1612D, 0x1612F, JoiningType::Transparent),
    (0x16AF0, 0x16AF4, JoiningType::Transparent),
    (0x16B30, 0x16B36, JoiningType::Transparent),
    (0x16F4F, 0x16F4F, JoiningType::Transparent),
    (0x16F8F, 0x16F92, JoiningType::Transparent),
    (0x16FE4, 0x16FE4, JoiningType::Transparent),
    (0x1BC9D, 0x1BC9E, JoiningType::Transparent),
    (0x1BCA0, 0x1BCA3, JoiningType::Transparent),
    (0x1CF00, 0x1CF2D, JoiningType::Transparent),
    (0x1CF30, 0x1CF46, JoiningType::Transparent),
    (0x1D167, 0x1D169, JoiningType::Transparent),
    (0x1D173, 0x1D182, JoiningType::Transparent),
    (0x1D185, 0x1D18B, JoiningType::Transparent),
    (0x1D1AA, 0x1D1AD, JoiningType::Transparent),
    (0x1D242, 0x1D244, JoiningType::Transparent),
    (0x1DA00, 0x1DA36, JoiningType::Transparent),
    (0x1DA3B, 0x1DA6C, JoiningType::Transparent),
    (0x1DA75, 0x1DA75, JoiningType::Transparent),
    (0x1DA84, 0x1DA84, JoiningType::Transparent),
    (0x1DA9B, 0x1DA9F, JoiningType::Transparent),
    (0x1DAA1, 0x1DAAF, JoiningType::Transparent),
    (0x1E000, 0x1E006, JoiningType::Transparent),
    (0x1E008, 0x1E018, JoiningType::Transparent),
    (0x1E01B, 0x1E021, JoiningType::Transparent),
    (0x1E023, 0x1E024, JoiningType::Transparent),
    (0x1E026, 0x1E02A, JoiningType::Transparent),
    (0x1E08F, 0x1E08F, JoiningType::Transparent),
    (0x1E130, 0x1E136, JoiningType::Transparent),
    (0x1E2AE, 0x1E2AE, JoiningType::Transparent),
    (0x1E2EC, 0x1E2EF, JoiningType::Transparent),
    (0x1E4EC, 0x1E4EF, JoiningType::Transparent),
    (0x1E5EE, 0x1E5EF, JoiningType::Transparent),
    (0x1E6E3, 0x1E6E3, JoiningType::Transparent),
    (0x1E6E6, 0x1E6E6, JoiningType::Transparent),
    (0x1E6EE, 0x1E6EF, JoiningType::Transparent),
    (0x1E6F5, 0x1E6F5, JoiningType::Transparent),
    (0x1E8D0, 0x1E8D6, JoiningType::Transparent),
    (0x1E900, 0x1E943, JoiningType::Dual),
    (0x1E944, 0x1E94B, JoiningType::Transparent),
    (0xE0001, 0xE0001, JoiningType::Transparent),
    (0xE0020, 0xE007F, JoiningType::Transparent),
    (0xE0100, 0xE01EF, JoiningType::Transparent),
];

/// The Greek script.
static GREEK: &[(u32, u32, ())] = &[
    (0x0370, 0x0373, ()),
    (0x0375, 0x0377, ()),
    (0x037A, 0x037D, ()),
    (0x037F, 0x037F, ()),
    (0x0384, 0x0384, ()),
    (0x0386, 0x0386, ()),
    (0x0388, 0x038A, ()),
    (0x038C, 0x038C, ()),
    (0x038E, 0x03A1, ()),
    (0x03A3, 0x03E1, ()),
    (0x03F0, 0x03FF, ()),
    (0x1D26, 0x1D2A, ()),
    (0x1D5D, 0x1D61, ()),
    (0x1D66, 0x1D6A, ()),
    (0x1DBF, 0x1DBF, ()),
    (0x1F00, 0x1F15, ()),
    (0x1F18, 0x1F1D, ()),
    (0x1F20, 0x1F45, ()),
    (0x1F48, 0x1F4D, ()),
    (0x1F50, 0x1F57, ()),
    (0x1F59, 0x1F59, ()),
    (0x1F5B, 0x1F5B, ()),
    (0x1F5D, 0x1F5D, ()),
    (0x1F5F, 0x1F7D, ()),
    (0x1F80, 0x1FB4, ()),
    (0x1FB6, 0x1FC4, ()),
    (0x1FC6, 0x1FD3, ()),
    (0x1FD6, 0x1FDB, ()),
    (0x1FDD, 0x1FEF, ()),
    (0x1FF2, 0x1FF4, ()),
    (0x1FF6, 0x1FFE, ()),
    (0x2126, 0x2126, ()),
    (0xAB65, 0xAB65, ()),
    (0x10140, 0x1018E, ()),
    (0x101A0, 0x101A0, ()),
    (0x1D200, 0x1D245, ()),
];

/// The Hebrew script.
static HEBREW: &[(u32, u32, ())] = &[
    (0x0591, 0x05C7, ()),
    (0x05D0, 0x05EA, ()),
    (0x05EF, 0x05F4, ()),
    (0xFB1D, 0xFB36, ()),
    (0xFB38, 0xFB3C, ()),
    (0xFB3E, 0xFB3E, ()),
    (0xFB40, 0xFB41, ()),
    (0xFB43, 0xFB44, ()),
    (0xFB46, 0xFB4F, ()),
];

/// The Hiragana, Katakana, and Han scripts.
static HIRAGANA_KATAKANA_HAN: &[(u32, u32, ())] = &[
    (0x2E80, 0x2E99, ()),
    (0x2E9B, 0x2EF3, ()),
    (0x2F00, 0x2FD5, ()),
    (0x3005, 0x3005, ()),
    (0x3007, 0x3007, ()),
    (0x3021, 0x3029, ()),
    (0x3038, 0x303B, ()),
    (0x3041, 0x3096, ()),
    (0x309D, 0x309F, ()),
    (0x30A1, 0x30FA, ()),
    (0x30FD, 0x30FF, ()),
    (0x31F0, 0x31FF, ()),
    (0x32D0, 0x32FE, ()),
    (0x3300, 0x3357, ()),
    (0x3400, 0x4DBF, ()),
    (0x4E00, 0x9FFF, ()),
    (0xF900, 0xFA6D, ()),
    (0xFA70, 0xFAD9, ()),
    (0xFF66, 0xFF6F, ()),
    (0xFF71, 0xFF9D, ()),
    (0x16FE2, 0x16FE3, ()),
    (0x16FF0, 0x16FF6, ()),
    (0x1AFF0, 0x1AFF3, ()),
    (0x1AFF5, 0x1AFFB, ()),
    (0x1AFFD, 0x1AFFE, ()),
    (0x1B000, 0x1B122, ()),
    (0x1B132, 0x1B132, ()),
    (0x1B150, 0x1B152, ()),
    (0x1B155, 0x1B155, ()),
    (0x1B164, 0x1B167, ()),
    (0x1F200, 0x1F200, ()),
    (0x20000, 0x2A6DF, ()),
    (0x2A700, 0x2B81D, ()),
    (0x2B820, 0x2CEAD, ()),
    (0x2CEB0, 0x2EBE0, ()),
    (0x2EBF0, 0x2EE5D, ()),
    (0x2F800, 0x2FA1D, ()),
    (0x30000, 0x3134A, ()),
    (0x31350, 0x33479, ()),
];
