//! Bundled country reference data.
//!
//! The authoritative ISO 3166-1 alpha-2 list, plus phone and currency
//! lookup tables keyed by country code. All three are immutable constant
//! data compiled into the binary; the sync job treats `COUNTRIES` as the
//! ground truth for which codes exist. The lookup tables cover common
//! countries only, so a code may legitimately be absent from them.

/// One entry of the authoritative country list.
pub struct CountryRecord {
    pub code: &'static str,
    pub name: &'static str,
}

/// Every ISO 3166-1 alpha-2 country, sorted by code.
pub const COUNTRIES: &[CountryRecord] = &[
    CountryRecord { code: "AD", name: "Andorra" },
    CountryRecord { code: "AE", name: "United Arab Emirates" },
    CountryRecord { code: "AF", name: "Afghanistan" },
    CountryRecord { code: "AG", name: "Antigua and Barbuda" },
    CountryRecord { code: "AI", name: "Anguilla" },
    CountryRecord { code: "AL", name: "Albania" },
    CountryRecord { code: "AM", name: "Armenia" },
    CountryRecord { code: "AO", name: "Angola" },
    CountryRecord { code: "AQ", name: "Antarctica" },
    CountryRecord { code: "AR", name: "Argentina" },
    CountryRecord { code: "AS", name: "American Samoa" },
    CountryRecord { code: "AT", name: "Austria" },
    CountryRecord { code: "AU", name: "Australia" },
    CountryRecord { code: "AW", name: "Aruba" },
    CountryRecord { code: "AX", name: "Åland Islands" },
    CountryRecord { code: "AZ", name: "Azerbaijan" },
    CountryRecord { code: "BA", name: "Bosnia and Herzegovina" },
    CountryRecord { code: "BB", name: "Barbados" },
    CountryRecord { code: "BD", name: "Bangladesh" },
    CountryRecord { code: "BE", name: "Belgium" },
    CountryRecord { code: "BF", name: "Burkina Faso" },
    CountryRecord { code: "BG", name: "Bulgaria" },
    CountryRecord { code: "BH", name: "Bahrain" },
    CountryRecord { code: "BI", name: "Burundi" },
    CountryRecord { code: "BJ", name: "Benin" },
    CountryRecord { code: "BL", name: "Saint Barthélemy" },
    CountryRecord { code: "BM", name: "Bermuda" },
    CountryRecord { code: "BN", name: "Brunei Darussalam" },
    CountryRecord { code: "BO", name: "Bolivia, Plurinational State of" },
    CountryRecord { code: "BQ", name: "Bonaire, Sint Eustatius and Saba" },
    CountryRecord { code: "BR", name: "Brazil" },
    CountryRecord { code: "BS", name: "Bahamas" },
    CountryRecord { code: "BT", name: "Bhutan" },
    CountryRecord { code: "BV", name: "Bouvet Island" },
    CountryRecord { code: "BW", name: "Botswana" },
    CountryRecord { code: "BY", name: "Belarus" },
    CountryRecord { code: "BZ", name: "Belize" },
    CountryRecord { code: "CA", name: "Canada" },
    CountryRecord { code: "CC", name: "Cocos (Keeling) Islands" },
    CountryRecord { code: "CD", name: "Congo, The Democratic Republic of the" },
    CountryRecord { code: "CF", name: "Central African Republic" },
    CountryRecord { code: "CG", name: "Congo" },
    CountryRecord { code: "CH", name: "Switzerland" },
    CountryRecord { code: "CI", name: "Côte d'Ivoire" },
    CountryRecord { code: "CK", name: "Cook Islands" },
    CountryRecord { code: "CL", name: "Chile" },
    CountryRecord { code: "CM", name: "Cameroon" },
    CountryRecord { code: "CN", name: "China" },
    CountryRecord { code: "CO", name: "Colombia" },
    CountryRecord { code: "CR", name: "Costa Rica" },
    CountryRecord { code: "CU", name: "Cuba" },
    CountryRecord { code: "CV", name: "Cabo Verde" },
    CountryRecord { code: "CW", name: "Curaçao" },
    CountryRecord { code: "CX", name: "Christmas Island" },
    CountryRecord { code: "CY", name: "Cyprus" },
    CountryRecord { code: "CZ", name: "Czechia" },
    CountryRecord { code: "DE", name: "Germany" },
    CountryRecord { code: "DJ", name: "Djibouti" },
    CountryRecord { code: "DK", name: "Denmark" },
    CountryRecord { code: "DM", name: "Dominica" },
    CountryRecord { code: "DO", name: "Dominican Republic" },
    CountryRecord { code: "DZ", name: "Algeria" },
    CountryRecord { code: "EC", name: "Ecuador" },
    CountryRecord { code: "EE", name: "Estonia" },
    CountryRecord { code: "EG", name: "Egypt" },
    CountryRecord { code: "EH", name: "Western Sahara" },
    CountryRecord { code: "ER", name: "Eritrea" },
    CountryRecord { code: "ES", name: "Spain" },
    CountryRecord { code: "ET", name: "Ethiopia" },
    CountryRecord { code: "FI", name: "Finland" },
    CountryRecord { code: "FJ", name: "Fiji" },
    CountryRecord { code: "FK", name: "Falkland Islands (Malvinas)" },
    CountryRecord { code: "FM", name: "Micronesia, Federated States of" },
    CountryRecord { code: "FO", name: "Faroe Islands" },
    CountryRecord { code: "FR", name: "France" },
    CountryRecord { code: "GA", name: "Gabon" },
    CountryRecord { code: "GB", name: "United Kingdom" },
    CountryRecord { code: "GD", name: "Grenada" },
    CountryRecord { code: "GE", name: "Georgia" },
    CountryRecord { code: "GF", name: "French Guiana" },
    CountryRecord { code: "GG", name: "Guernsey" },
    CountryRecord { code: "GH", name: "Ghana" },
    CountryRecord { code: "GI", name: "Gibraltar" },
    CountryRecord { code: "GL", name: "Greenland" },
    CountryRecord { code: "GM", name: "Gambia" },
    CountryRecord { code: "GN", name: "Guinea" },
    CountryRecord { code: "GP", name: "Guadeloupe" },
    CountryRecord { code: "GQ", name: "Equatorial Guinea" },
    CountryRecord { code: "GR", name: "Greece" },
    CountryRecord { code: "GS", name: "South Georgia and the South Sandwich Islands" },
    CountryRecord { code: "GT", name: "Guatemala" },
    CountryRecord { code: "GU", name: "Guam" },
    CountryRecord { code: "GW", name: "Guinea-Bissau" },
    CountryRecord { code: "GY", name: "Guyana" },
    CountryRecord { code: "HK", name: "Hong Kong" },
    CountryRecord { code: "HM", name: "Heard Island and McDonald Islands" },
    CountryRecord { code: "HN", name: "Honduras" },
    CountryRecord { code: "HR", name: "Croatia" },
    CountryRecord { code: "HT", name: "Haiti" },
    CountryRecord { code: "HU", name: "Hungary" },
    CountryRecord { code: "ID", name: "Indonesia" },
    CountryRecord { code: "IE", name: "Ireland" },
    CountryRecord { code: "IL", name: "Israel" },
    CountryRecord { code: "IM", name: "Isle of Man" },
    CountryRecord { code: "IN", name: "India" },
    CountryRecord { code: "IO", name: "British Indian Ocean Territory" },
    CountryRecord { code: "IQ", name: "Iraq" },
    CountryRecord { code: "IR", name: "Iran, Islamic Republic of" },
    CountryRecord { code: "IS", name: "Iceland" },
    CountryRecord { code: "IT", name: "Italy" },
    CountryRecord { code: "JE", name: "Jersey" },
    CountryRecord { code: "JM", name: "Jamaica" },
    CountryRecord { code: "JO", name: "Jordan" },
    CountryRecord { code: "JP", name: "Japan" },
    CountryRecord { code: "KE", name: "Kenya" },
    CountryRecord { code: "KG", name: "Kyrgyzstan" },
    CountryRecord { code: "KH", name: "Cambodia" },
    CountryRecord { code: "KI", name: "Kiribati" },
    CountryRecord { code: "KM", name: "Comoros" },
    CountryRecord { code: "KN", name: "Saint Kitts and Nevis" },
    CountryRecord { code: "KP", name: "Korea, Democratic People's Republic of" },
    CountryRecord { code: "KR", name: "Korea, Republic of" },
    CountryRecord { code: "KW", name: "Kuwait" },
    CountryRecord { code: "KY", name: "Cayman Islands" },
    CountryRecord { code: "KZ", name: "Kazakhstan" },
    CountryRecord { code: "LA", name: "Lao People's Democratic Republic" },
    CountryRecord { code: "LB", name: "Lebanon" },
    CountryRecord { code: "LC", name: "Saint Lucia" },
    CountryRecord { code: "LI", name: "Liechtenstein" },
    CountryRecord { code: "LK", name: "Sri Lanka" },
    CountryRecord { code: "LR", name: "Liberia" },
    CountryRecord { code: "LS", name: "Lesotho" },
    CountryRecord { code: "LT", name: "Lithuania" },
    CountryRecord { code: "LU", name: "Luxembourg" },
    CountryRecord { code: "LV", name: "Latvia" },
    CountryRecord { code: "LY", name: "Libya" },
    CountryRecord { code: "MA", name: "Morocco" },
    CountryRecord { code: "MC", name: "Monaco" },
    CountryRecord { code: "MD", name: "Moldova, Republic of" },
    CountryRecord { code: "ME", name: "Montenegro" },
    CountryRecord { code: "MF", name: "Saint Martin (French part)" },
    CountryRecord { code: "MG", name: "Madagascar" },
    CountryRecord { code: "MH", name: "Marshall Islands" },
    CountryRecord { code: "MK", name: "North Macedonia" },
    CountryRecord { code: "ML", name: "Mali" },
    CountryRecord { code: "MM", name: "Myanmar" },
    CountryRecord { code: "MN", name: "Mongolia" },
    CountryRecord { code: "MO", name: "Macao" },
    CountryRecord { code: "MP", name: "Northern Mariana Islands" },
    CountryRecord { code: "MQ", name: "Martinique" },
    CountryRecord { code: "MR", name: "Mauritania" },
    CountryRecord { code: "MS", name: "Montserrat" },
    CountryRecord { code: "MT", name: "Malta" },
    CountryRecord { code: "MU", name: "Mauritius" },
    CountryRecord { code: "MV", name: "Maldives" },
    CountryRecord { code: "MW", name: "Malawi" },
    CountryRecord { code: "MX", name: "Mexico" },
    CountryRecord { code: "MY", name: "Malaysia" },
    CountryRecord { code: "MZ", name: "Mozambique" },
    CountryRecord { code: "NA", name: "Namibia" },
    CountryRecord { code: "NC", name: "New Caledonia" },
    CountryRecord { code: "NE", name: "Niger" },
    CountryRecord { code: "NF", name: "Norfolk Island" },
    CountryRecord { code: "NG", name: "Nigeria" },
    CountryRecord { code: "NI", name: "Nicaragua" },
    CountryRecord { code: "NL", name: "Netherlands" },
    CountryRecord { code: "NO", name: "Norway" },
    CountryRecord { code: "NP", name: "Nepal" },
    CountryRecord { code: "NR", name: "Nauru" },
    CountryRecord { code: "NU", name: "Niue" },
    CountryRecord { code: "NZ", name: "New Zealand" },
    CountryRecord { code: "OM", name: "Oman" },
    CountryRecord { code: "PA", name: "Panama" },
    CountryRecord { code: "PE", name: "Peru" },
    CountryRecord { code: "PF", name: "French Polynesia" },
    CountryRecord { code: "PG", name: "Papua New Guinea" },
    CountryRecord { code: "PH", name: "Philippines" },
    CountryRecord { code: "PK", name: "Pakistan" },
    CountryRecord { code: "PL", name: "Poland" },
    CountryRecord { code: "PM", name: "Saint Pierre and Miquelon" },
    CountryRecord { code: "PN", name: "Pitcairn" },
    CountryRecord { code: "PR", name: "Puerto Rico" },
    CountryRecord { code: "PS", name: "Palestine, State of" },
    CountryRecord { code: "PT", name: "Portugal" },
    CountryRecord { code: "PW", name: "Palau" },
    CountryRecord { code: "PY", name: "Paraguay" },
    CountryRecord { code: "QA", name: "Qatar" },
    CountryRecord { code: "RE", name: "Réunion" },
    CountryRecord { code: "RO", name: "Romania" },
    CountryRecord { code: "RS", name: "Serbia" },
    CountryRecord { code: "RU", name: "Russian Federation" },
    CountryRecord { code: "RW", name: "Rwanda" },
    CountryRecord { code: "SA", name: "Saudi Arabia" },
    CountryRecord { code: "SB", name: "Solomon Islands" },
    CountryRecord { code: "SC", name: "Seychelles" },
    CountryRecord { code: "SD", name: "Sudan" },
    CountryRecord { code: "SE", name: "Sweden" },
    CountryRecord { code: "SG", name: "Singapore" },
    CountryRecord { code: "SH", name: "Saint Helena, Ascension and Tristan da Cunha" },
    CountryRecord { code: "SI", name: "Slovenia" },
    CountryRecord { code: "SJ", name: "Svalbard and Jan Mayen" },
    CountryRecord { code: "SK", name: "Slovakia" },
    CountryRecord { code: "SL", name: "Sierra Leone" },
    CountryRecord { code: "SM", name: "San Marino" },
    CountryRecord { code: "SN", name: "Senegal" },
    CountryRecord { code: "SO", name: "Somalia" },
    CountryRecord { code: "SR", name: "Suriname" },
    CountryRecord { code: "SS", name: "South Sudan" },
    CountryRecord { code: "ST", name: "Sao Tome and Principe" },
    CountryRecord { code: "SV", name: "El Salvador" },
    CountryRecord { code: "SX", name: "Sint Maarten (Dutch part)" },
    CountryRecord { code: "SY", name: "Syrian Arab Republic" },
    CountryRecord { code: "SZ", name: "Eswatini" },
    CountryRecord { code: "TC", name: "Turks and Caicos Islands" },
    CountryRecord { code: "TD", name: "Chad" },
    CountryRecord { code: "TF", name: "French Southern Territories" },
    CountryRecord { code: "TG", name: "Togo" },
    CountryRecord { code: "TH", name: "Thailand" },
    CountryRecord { code: "TJ", name: "Tajikistan" },
    CountryRecord { code: "TK", name: "Tokelau" },
    CountryRecord { code: "TL", name: "Timor-Leste" },
    CountryRecord { code: "TM", name: "Turkmenistan" },
    CountryRecord { code: "TN", name: "Tunisia" },
    CountryRecord { code: "TO", name: "Tonga" },
    CountryRecord { code: "TR", name: "Türkiye" },
    CountryRecord { code: "TT", name: "Trinidad and Tobago" },
    CountryRecord { code: "TV", name: "Tuvalu" },
    CountryRecord { code: "TW", name: "Taiwan, Province of China" },
    CountryRecord { code: "TZ", name: "Tanzania, United Republic of" },
    CountryRecord { code: "UA", name: "Ukraine" },
    CountryRecord { code: "UG", name: "Uganda" },
    CountryRecord { code: "UM", name: "United States Minor Outlying Islands" },
    CountryRecord { code: "US", name: "United States" },
    CountryRecord { code: "UY", name: "Uruguay" },
    CountryRecord { code: "UZ", name: "Uzbekistan" },
    CountryRecord { code: "VA", name: "Holy See (Vatican City State)" },
    CountryRecord { code: "VC", name: "Saint Vincent and the Grenadines" },
    CountryRecord { code: "VE", name: "Venezuela, Bolivarian Republic of" },
    CountryRecord { code: "VG", name: "Virgin Islands, British" },
    CountryRecord { code: "VI", name: "Virgin Islands, U.S." },
    CountryRecord { code: "VN", name: "Viet Nam" },
    CountryRecord { code: "VU", name: "Vanuatu" },
    CountryRecord { code: "WF", name: "Wallis and Futuna" },
    CountryRecord { code: "WS", name: "Samoa" },
    CountryRecord { code: "YE", name: "Yemen" },
    CountryRecord { code: "YT", name: "Mayotte" },
    CountryRecord { code: "ZA", name: "South Africa" },
    CountryRecord { code: "ZM", name: "Zambia" },
    CountryRecord { code: "ZW", name: "Zimbabwe" },
];

/// International dialing prefixes for common countries.
pub const PHONE_CODES: &[(&str, &str)] = &[
    ("AF", "+93"), ("AL", "+355"), ("DZ", "+213"), ("AD", "+376"), ("AO", "+244"),
    ("AR", "+54"), ("AM", "+374"), ("AU", "+61"), ("AT", "+43"), ("AZ", "+994"),
    ("BH", "+973"), ("BD", "+880"), ("BY", "+375"), ("BE", "+32"), ("BJ", "+229"),
    ("BT", "+975"), ("BO", "+591"), ("BA", "+387"), ("BW", "+267"), ("BR", "+55"),
    ("BN", "+673"), ("BG", "+359"), ("BF", "+226"), ("BI", "+257"), ("KH", "+855"),
    ("CM", "+237"), ("CA", "+1"), ("CV", "+238"), ("CF", "+236"), ("TD", "+235"),
    ("CL", "+56"), ("CN", "+86"), ("CO", "+57"), ("KM", "+269"), ("CG", "+242"),
    ("CD", "+243"), ("CR", "+506"), ("CI", "+225"), ("HR", "+385"), ("CU", "+53"),
    ("CY", "+357"), ("CZ", "+420"), ("DK", "+45"), ("DJ", "+253"), ("DO", "+1"),
    ("EC", "+593"), ("EG", "+20"), ("SV", "+503"), ("GQ", "+240"), ("ER", "+291"),
    ("EE", "+372"), ("SZ", "+268"), ("ET", "+251"), ("FJ", "+679"), ("FI", "+358"),
    ("FR", "+33"), ("GA", "+241"), ("GM", "+220"), ("GE", "+995"), ("DE", "+49"),
    ("GH", "+233"), ("GR", "+30"), ("GT", "+502"), ("GN", "+224"), ("GW", "+245"),
    ("GY", "+592"), ("HT", "+509"), ("HN", "+504"), ("HK", "+852"), ("HU", "+36"),
    ("IS", "+354"), ("IN", "+91"), ("ID", "+62"), ("IR", "+98"), ("IQ", "+964"),
    ("IE", "+353"), ("IL", "+972"), ("IT", "+39"), ("JM", "+1"), ("JP", "+81"),
    ("JO", "+962"), ("KZ", "+7"), ("KE", "+254"), ("KW", "+965"), ("KG", "+996"),
    ("LA", "+856"), ("LV", "+371"), ("LB", "+961"), ("LS", "+266"), ("LR", "+231"),
    ("LY", "+218"), ("LI", "+423"), ("LT", "+370"), ("LU", "+352"), ("MG", "+261"),
    ("MW", "+265"), ("MY", "+60"), ("MV", "+960"), ("ML", "+223"), ("MT", "+356"),
    ("MR", "+222"), ("MU", "+230"), ("MX", "+52"), ("MD", "+373"), ("MC", "+377"),
    ("MN", "+976"), ("ME", "+382"), ("MA", "+212"), ("MZ", "+258"), ("MM", "+95"),
    ("NA", "+264"), ("NP", "+977"), ("NL", "+31"), ("NZ", "+64"), ("NI", "+505"),
    ("NE", "+227"), ("NG", "+234"), ("KP", "+850"), ("MK", "+389"), ("NO", "+47"),
    ("OM", "+968"), ("PK", "+92"), ("PA", "+507"), ("PG", "+675"), ("PY", "+595"),
    ("PE", "+51"), ("PH", "+63"), ("PL", "+48"), ("PT", "+351"), ("QA", "+974"),
    ("RO", "+40"), ("RU", "+7"), ("RW", "+250"), ("SA", "+966"), ("SN", "+221"),
    ("RS", "+381"), ("SL", "+232"), ("SG", "+65"), ("SK", "+421"), ("SI", "+386"),
    ("SO", "+252"), ("ZA", "+27"), ("KR", "+82"), ("SS", "+211"), ("ES", "+34"),
    ("LK", "+94"), ("SD", "+249"), ("SR", "+597"), ("SE", "+46"), ("CH", "+41"),
    ("SY", "+963"), ("TW", "+886"), ("TJ", "+992"), ("TZ", "+255"), ("TH", "+66"),
    ("TL", "+670"), ("TG", "+228"), ("TT", "+1"), ("TN", "+216"), ("TR", "+90"),
    ("TM", "+993"), ("UG", "+256"), ("UA", "+380"), ("AE", "+971"), ("GB", "+44"),
    ("US", "+1"), ("UY", "+598"), ("UZ", "+998"), ("VE", "+58"), ("VN", "+84"),
    ("YE", "+967"), ("ZM", "+260"), ("ZW", "+263"),
];

/// ISO 4217 currency codes for common countries.
pub const CURRENCY_CODES: &[(&str, &str)] = &[
    ("AF", "AFN"), ("AL", "ALL"), ("DZ", "DZD"), ("AD", "EUR"), ("AO", "AOA"),
    ("AR", "ARS"), ("AM", "AMD"), ("AU", "AUD"), ("AT", "EUR"), ("AZ", "AZN"),
    ("BH", "BHD"), ("BD", "BDT"), ("BY", "BYN"), ("BE", "EUR"), ("BJ", "XOF"),
    ("BT", "BTN"), ("BO", "BOB"), ("BA", "BAM"), ("BW", "BWP"), ("BR", "BRL"),
    ("BN", "BND"), ("BG", "BGN"), ("BF", "XOF"), ("BI", "BIF"), ("KH", "KHR"),
    ("CM", "XAF"), ("CA", "CAD"), ("CV", "CVE"), ("CF", "XAF"), ("TD", "XAF"),
    ("CL", "CLP"), ("CN", "CNY"), ("CO", "COP"), ("KM", "KMF"), ("CG", "XAF"),
    ("CD", "CDF"), ("CR", "CRC"), ("CI", "XOF"), ("HR", "EUR"), ("CU", "CUP"),
    ("CY", "EUR"), ("CZ", "CZK"), ("DK", "DKK"), ("DJ", "DJF"), ("DO", "DOP"),
    ("EC", "USD"), ("EG", "EGP"), ("SV", "USD"), ("GQ", "XAF"), ("ER", "ERN"),
    ("EE", "EUR"), ("SZ", "SZL"), ("ET", "ETB"), ("FJ", "FJD"), ("FI", "EUR"),
    ("FR", "EUR"), ("GA", "XAF"), ("GM", "GMD"), ("GE", "GEL"), ("DE", "EUR"),
    ("GH", "GHS"), ("GR", "EUR"), ("GT", "GTQ"), ("GN", "GNF"), ("GW", "XOF"),
    ("GY", "GYD"), ("HT", "HTG"), ("HN", "HNL"), ("HK", "HKD"), ("HU", "HUF"),
    ("IS", "ISK"), ("IN", "INR"), ("ID", "IDR"), ("IR", "IRR"), ("IQ", "IQD"),
    ("IE", "EUR"), ("IL", "ILS"), ("IT", "EUR"), ("JM", "JMD"), ("JP", "JPY"),
    ("JO", "JOD"), ("KZ", "KZT"), ("KE", "KES"), ("KW", "KWD"), ("KG", "KGS"),
    ("LA", "LAK"), ("LV", "EUR"), ("LB", "LBP"), ("LS", "LSL"), ("LR", "LRD"),
    ("LY", "LYD"), ("LI", "CHF"), ("LT", "EUR"), ("LU", "EUR"), ("MG", "MGA"),
    ("MW", "MWK"), ("MY", "MYR"), ("MV", "MVR"), ("ML", "XOF"), ("MT", "EUR"),
    ("MR", "MRU"), ("MU", "MUR"), ("MX", "MXN"), ("MD", "MDL"), ("MC", "EUR"),
    ("MN", "MNT"), ("ME", "EUR"), ("MA", "MAD"), ("MZ", "MZN"), ("MM", "MMK"),
    ("NA", "NAD"), ("NP", "NPR"), ("NL", "EUR"), ("NZ", "NZD"), ("NI", "NIO"),
    ("NE", "XOF"), ("NG", "NGN"), ("KP", "KPW"), ("MK", "MKD"), ("NO", "NOK"),
    ("OM", "OMR"), ("PK", "PKR"), ("PA", "PAB"), ("PG", "PGK"), ("PY", "PYG"),
    ("PE", "PEN"), ("PH", "PHP"), ("PL", "PLN"), ("PT", "EUR"), ("QA", "QAR"),
    ("RO", "RON"), ("RU", "RUB"), ("RW", "RWF"), ("SA", "SAR"), ("SN", "XOF"),
    ("RS", "RSD"), ("SL", "SLE"), ("SG", "SGD"), ("SK", "EUR"), ("SI", "EUR"),
    ("SO", "SOS"), ("ZA", "ZAR"), ("KR", "KRW"), ("SS", "SSP"), ("ES", "EUR"),
    ("LK", "LKR"), ("SD", "SDG"), ("SR", "SRD"), ("SE", "SEK"), ("CH", "CHF"),
    ("SY", "SYP"), ("TW", "TWD"), ("TJ", "TJS"), ("TZ", "TZS"), ("TH", "THB"),
    ("TL", "USD"), ("TG", "XOF"), ("TT", "TTD"), ("TN", "TND"), ("TR", "TRY"),
    ("TM", "TMT"), ("UG", "UGX"), ("UA", "UAH"), ("AE", "AED"), ("GB", "GBP"),
    ("US", "USD"), ("UY", "UYU"), ("UZ", "UZS"), ("VE", "VES"), ("VN", "VND"),
    ("YE", "YER"), ("ZM", "ZMW"), ("ZW", "ZWL"),
];

pub fn phone_code(code: &str) -> Option<&'static str> {
    lookup(PHONE_CODES, code)
}

pub fn currency_code(code: &str) -> Option<&'static str> {
    lookup(CURRENCY_CODES, code)
}

fn lookup(table: &'static [(&str, &str)], code: &str) -> Option<&'static str> {
    table.iter().find(|(c, _)| *c == code).map(|(_, v)| *v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_codes_are_unique_and_sorted() {
        for pair in COUNTRIES.windows(2) {
            assert!(pair[0].code < pair[1].code);
        }
    }

    #[test]
    fn lookup_tables_only_reference_known_codes() {
        let known: std::collections::HashSet<&str> = COUNTRIES.iter().map(|c| c.code).collect();
        for (code, _) in PHONE_CODES.iter().chain(CURRENCY_CODES.iter()) {
            assert!(known.contains(code), "unknown code {code}");
        }
    }

    #[test]
    fn common_country_lookups_resolve() {
        assert_eq!(phone_code("NG"), Some("+234"));
        assert_eq!(currency_code("US"), Some("USD"));
        assert_eq!(phone_code("AQ"), None);
    }
}
