//! ISO 4217 currency codes.
//!
//! GPC statements carry the transaction currency as its numeric ISO 4217
//! code. The table below is immutable and shared by the whole process.

use serde::{Serialize, Serializer};
use std::fmt;

/// Numeric code → alphabetic symbol, sorted by code.
#[rustfmt::skip]
static SYMBOLS: &[(u16, &str)] = &[
    (8, "ALL"), (12, "DZD"), (32, "ARS"), (36, "AUD"), (44, "BSD"), (48, "BHD"),
    (50, "BDT"), (51, "AMD"), (52, "BBD"), (60, "BMD"), (64, "BTN"), (68, "BOB"),
    (72, "BWP"), (84, "BZD"), (90, "SBD"), (96, "BND"), (104, "MMK"), (108, "BIF"),
    (116, "KHR"), (124, "CAD"), (132, "CVE"), (136, "KYD"), (144, "LKR"), (152, "CLP"),
    (156, "CNY"), (170, "COP"), (174, "KMF"), (188, "CRC"), (191, "HRK"), (192, "CUP"),
    (203, "CZK"), (208, "DKK"), (214, "DOP"), (222, "SVC"), (230, "ETB"), (232, "ERN"),
    (238, "FKP"), (242, "FJD"), (262, "DJF"), (270, "GMD"), (292, "GIP"), (320, "GTQ"),
    (324, "GNF"), (328, "GYD"), (332, "HTG"), (340, "HNL"), (344, "HKD"), (348, "HUF"),
    (352, "ISK"), (356, "INR"), (360, "IDR"), (364, "IRR"), (368, "IQD"), (376, "ILS"),
    (388, "JMD"), (392, "JPY"), (398, "KZT"), (400, "JOD"), (404, "KES"), (408, "KPW"),
    (410, "KRW"), (414, "KWD"), (417, "KGS"), (418, "LAK"), (422, "LBP"), (426, "LSL"),
    (430, "LRD"), (434, "LYD"), (440, "LTL"), (446, "MOP"), (454, "MWK"), (458, "MYR"),
    (462, "MVR"), (478, "MRO"), (480, "MUR"), (484, "MXN"), (496, "MNT"), (498, "MDL"),
    (504, "MAD"), (512, "OMR"), (516, "NAD"), (524, "NPR"), (532, "ANG"), (533, "AWG"),
    (548, "VUV"), (554, "NZD"), (558, "NIO"), (566, "NGN"), (578, "NOK"), (586, "PKR"),
    (590, "PAB"), (598, "PGK"), (600, "PYG"), (604, "PEN"), (608, "PHP"), (634, "QAR"),
    (643, "RUB"), (646, "RWF"), (654, "SHP"), (678, "STD"), (682, "SAR"), (690, "SCR"),
    (694, "SLL"), (702, "SGD"), (704, "VND"), (706, "SOS"), (710, "ZAR"), (728, "SSP"),
    (748, "SZL"), (752, "SEK"), (756, "CHF"), (760, "SYP"), (764, "THB"), (776, "TOP"),
    (780, "TTD"), (784, "AED"), (788, "TND"), (800, "UGX"), (807, "MKD"), (818, "EGP"),
    (826, "GBP"), (834, "TZS"), (840, "USD"), (858, "UYU"), (860, "UZS"), (882, "WST"),
    (886, "YER"), (901, "TWD"), (931, "CUC"), (932, "ZWL"), (934, "TMT"), (936, "GHS"),
    (937, "VEF"), (938, "SDG"), (940, "UYI"), (941, "RSD"), (943, "MZN"), (944, "AZN"),
    (946, "RON"), (947, "CHE"), (948, "CHW"), (949, "TRY"), (950, "XAF"), (951, "XCD"),
    (952, "XOF"), (953, "XPF"), (955, "XBA"), (956, "XBB"), (957, "XBC"), (958, "XBD"),
    (959, "XAU"), (960, "XDR"), (961, "XAG"), (962, "XPT"), (963, "XTS"), (964, "XPD"),
    (965, "XUA"), (967, "ZMW"), (968, "SRD"), (969, "MGA"), (970, "COU"), (971, "AFN"),
    (972, "TJS"), (973, "AOA"), (974, "BYR"), (975, "BGN"), (976, "CDF"), (977, "BAM"),
    (978, "EUR"), (979, "MXV"), (980, "UAH"), (981, "GEL"), (984, "BOV"), (985, "PLN"),
    (986, "BRL"), (990, "CLF"), (994, "XSU"), (997, "USN"), (999, "XXX"),
];

/// Symbol reported for codes missing from the table.
pub const UNKNOWN_SYMBOL: &str = "---";

/// A numeric ISO 4217 currency code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Currency(pub u16);

impl Currency {
    /// Code reserved for an unknown currency.
    pub const UNKNOWN: Currency = Currency(0);
    /// Czech koruna.
    pub const CZK: Currency = Currency(203);
    /// Euro.
    pub const EUR: Currency = Currency(978);
    /// US dollar.
    pub const USD: Currency = Currency(840);

    /// Numeric code.
    pub fn code(&self) -> u16 {
        self.0
    }

    /// Alphabetic symbol, or [`UNKNOWN_SYMBOL`] for unrecognized codes.
    pub fn symbol(&self) -> &'static str {
        SYMBOLS
            .binary_search_by_key(&self.0, |&(code, _)| code)
            .map(|idx| SYMBOLS[idx].1)
            .unwrap_or(UNKNOWN_SYMBOL)
    }

    /// Returns `true` if the code is present in the table.
    pub fn is_known(&self) -> bool {
        self.symbol() != UNKNOWN_SYMBOL
    }

    /// Looks a currency up by its alphabetic symbol, ignoring case.
    pub fn from_symbol(symbol: &str) -> Currency {
        SYMBOLS
            .iter()
            .find(|(_, name)| name.eq_ignore_ascii_case(symbol.trim()))
            .map(|&(code, _)| Currency(code))
            .unwrap_or(Currency::UNKNOWN)
    }
}

impl From<u16> for Currency {
    fn from(code: u16) -> Self {
        Currency(code)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl Serialize for Currency {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.symbol())
    }
}
