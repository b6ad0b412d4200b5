//! The meter and foot tables. Built once by [`Catalog::new`] and shared by
//! reference for the lifetime of the program; nothing here is mutated after
//! construction.

/// Number of regular meters.
pub const NUM_METERS: usize = 129;
/// Length of the `METERS_VARIED` table below. The source keeps this data
/// with its active tier count hardcoded to 0 ("for future use") — varied
/// meters are catalogued but never enter the regular/rubaʿi/special meter
/// index space that `MeterId` and `SPECIAL_METER_BASE` walk. Kept here only
/// for array sizing, not as a live match tier.
pub const NUM_VARIED_METERS: usize = 7;
/// Number of rubaʿi-quatrain meters.
pub const NUM_RUBAI_METERS: usize = 12;
/// Number of special (Hindi/Zamzama) meters.
pub const NUM_SPECIAL_METERS: usize = 11;

/// A single classical meter: its pattern over `{-,=,/,+}` and its Urdu name.
#[derive(Debug, Clone, Copy)]
pub struct Meter {
    pub pattern: &'static str,
    pub name: &'static str,
}

/// A named foot fragment, e.g. `مفاعیلن` for `-===`.
#[derive(Debug, Clone, Copy)]
pub struct Foot {
    pub pattern: &'static str,
    pub name: &'static str,
}

/// `true` when a regular meter is in common use; deprecated meters are still
/// searched but only after the preferred tier comes up empty (see
/// `MeterSelection::Preferred` in `options.rs`).
pub static USAGE: [bool; NUM_METERS] = [
    true, true, true, true, true, true, true, true, false, false, false, true, true, true, true,
    true, true, true, true, true, true, true, true, true, true, true, true, true, true, true,
    true, true, true, true, true, true, true, true, true, true, true, true, true, true, true,
    true, true, true, true, true, true, true, true, true, true, true, true, true, true, true,
    true, true, true, true, true, true, true, true, true, true, true, true, true, true, true,
    true, true, true, true, true, true, true, true, true, true, false, false, false, true,
    false, true, false, true, false, true, true, true, true, true, true, true, true, true, true,
    true, true, true, true, true, true, true, true, true, true, true, false, false, false,
    false, true, true, true, true, true, true, true, true, true, true, true, true, true, true,
    true, true, true, true, true,
];

pub static METERS: [Meter; NUM_METERS] = [
    Meter { pattern: "-===/-===/-===/-===", name: "ہزج مثمن سالم" },
    Meter { pattern: "-===/-===/-===/-==", name: "ہزج مثمن محذوف" },
    Meter { pattern: "-=-=/-=-=/-=-=/-=-=", name: "ہزج مثمن مقبوض" },
    Meter { pattern: "=-=/-===+=-=/-===", name: "ہزج مثمن اشتر" },
    Meter { pattern: "-=-=/-===/-=-=/-===", name: "ہزج مثمن مقبوض سالم" },
    Meter { pattern: "==-/-==-/-==-/-===", name: "ہزج مثمن اخرب مکفوف سالم" },
    Meter { pattern: "==-/-===+==-/-===", name: "ہزج مثمن اخرب سالم" },
    Meter { pattern: "==-/-==-/-==-/-==", name: "ہزج مثمن اخرب مکفوف محذوف" },
    Meter { pattern: "===/==-/-==-/-==", name: "ہزج مثمن اخرب مکفوف محذوف" },
    Meter { pattern: "==-/-===/==-/-==", name: "ہزج مثمن اخرب مکفوف محذوف" },
    Meter { pattern: "==-/-==-/-===/==", name: "ہزج مثمن اخرب مکفوف محذوف" },
    Meter { pattern: "-===/-===/-===", name: "ہزج مسدس سالم" },
    Meter { pattern: "-===/-===/-==", name: "ہزج مسدس محذوف" },
    Meter { pattern: "==-/-=-=/-==", name: "ہزج مسدس اخرب مقبوض محذوف" },
    Meter { pattern: "===/=-=/-==", name: "ہزج مسدس اخرم اشتر محذوف" },
    Meter { pattern: "=-=/-=-=+=-=/-=-=", name: "ہزج مربع اشتر مقبوض مضاعف" },
    Meter { pattern: "-===/-==", name: "ہزج مربع محذوف" },
    Meter { pattern: "-===/-==+-===/-==", name: "ہزج مربع محذوف مضاعف" },
    Meter { pattern: "==-=/==-=/==-=/==-=", name: "رجز مثمن سالم" },
    Meter { pattern: "=--=/=--=/=--=/=--=", name: "رجز مثمن مطوی" },
    Meter { pattern: "=--=/-=-=+=--=/-=-=", name: "رجز مثمن مطوی مخبون" },
    Meter { pattern: "-=-=/=--=+-=-=/=--=", name: "رجز مثمن مخبون مطوی" },
    Meter { pattern: "==-=/==-=/==-=", name: "رجز مسدس سالم" },
    Meter { pattern: "=--=/=--=/=--=", name: "رجز مسدس مطوی" },
    Meter { pattern: "=-==/=-==/=-==/=-==", name: "رمل مثمن سالم" },
    Meter { pattern: "=-==/=-==/=-==/=-=", name: "رمل مثمن محذوف" },
    Meter { pattern: "=-==/--==/--==/--=", name: "رمل مثمن سالم مخبون محذوف" },
    Meter { pattern: "--==/--==/--==/--=", name: "رمل مثمن سالم مخبون محذوف" },
    Meter { pattern: "=-==/--==/--==/==", name: "رمل مثمن مخبون محذوف مقطوع" },
    Meter { pattern: "--==/--==/--==/==", name: "رمل مثمن مخبون محذوف مقطوع" },
    Meter { pattern: "--=-/=-==+--=-/=-==", name: "رمل مثمن مشکول" },
    Meter { pattern: "==-/=-==+==-/=-==", name: "رمل مثمن مشکول مسکّن" },
    Meter { pattern: "--==/--==/--==/--==", name: "رمل مثمن مخبون" },
    Meter { pattern: "=-==/=-==/=-==", name: "رمل مسدس سالم" },
    Meter { pattern: "=-==/=-==/=-=", name: "رمل مسدس محذوف" },
    Meter { pattern: "=-==/--==/--=", name: "رمل مسدس مخبون محذوف" },
    Meter { pattern: "=-==/--==/==", name: "رمل مسدس مخبون محذوف مسکن" },
    Meter { pattern: "--==/--==/--=", name: "رمل مسدس مخبون محذوف" },
    Meter { pattern: "--==/--==/==", name: "رمل مسدس مخبون محذوف مسکن" },
    Meter { pattern: "--==/--==/--==", name: "رمل مسدس مخبون" },
    Meter { pattern: "-==/-==/-==/-==", name: "متقارب مثمن سالم" },
    Meter { pattern: "-==/-==/-==/-==/-==/-==/-==/-==", name: "متقارب مثمن سالم مضاعف" },
    Meter { pattern: "-==/-==/-==/-=", name: "متقارب مثمن محذوف" },
    Meter { pattern: "=-/-=-/-=-/-==", name: "متقارب مثمن اثرم مقبوض" },
    Meter { pattern: "=-/-=-/-=-/-=", name: "متقارب مثمن اثرم مقبوض محذوف" },
    Meter { pattern: "=-/-=-/-=-/-=-/-=-/-=-/-=-/-=", name: "متقارب مثمن اثرم مقبوض مضاعف" },
    Meter { pattern: "=-/-=-/-=-/-=-/-=-/-=-/-=-/-==", name: "متقارب مثمن اثرم مقبوض محذوف مضاعف" },
    Meter { pattern: "-==/-==/-==", name: "متقارب مسدس سالم" },
    Meter { pattern: "-==/-==/-=", name: "متقارب مسدس محذوف" },
    Meter { pattern: "==/-==/==/-==", name: "متقارب مربع اثلم سالم مضاعف" },
    Meter { pattern: "=-=/=-=/=-=/=-=", name: "متدارک مثمن سالم" },
    Meter { pattern: "--=/--=/--=/--=", name: "متدارک مثمن مخبون" },
    Meter { pattern: "--=/--=/--=/--=/--=/--=/--=/--=", name: "متدارک مثمن مخبون مضاعف" },
    Meter { pattern: "=-=/=-=/=-=/--=", name: "متدارک مثمن سالم مقطوع" },
    Meter { pattern: "=-=/=-=/=-=", name: "متدارک مسدس سالم" },
    Meter { pattern: "=-=/-=/=-=/-=", name: "متدارک مربع مخلع مضاعف" },
    Meter { pattern: "--=-=/--=-=/--=-=/--=-=", name: "کامل مثمن سالم" },
    Meter { pattern: "--=-=/--=-=/--=-=", name: "کامل مسدس سالم" },
    Meter { pattern: "-=--=/-=--=/-=--=/-=--=", name: "وافر مثمن سالم" },
    Meter { pattern: "-=--=/-=--=/-=--=", name: "وافر مسدس سالم" },
    Meter { pattern: "-=--=/-=--=/-==", name: "وافر مسدس مقطوف" },
    Meter { pattern: "-===/=-==/-===/=-==", name: "مضارع مثمن سالم" },
    Meter { pattern: "-==-/=-=-/-==-/=-=", name: "مضارع مثمن مکفوف محذوف" },
    Meter { pattern: "==-/=-==/==-/=-==", name: "مضارع مثمن اخرب" },
    Meter { pattern: "==-/=-=-/-==-/=-=", name: "مضارع مثمن اخرب مکفوف محذوف" },
    Meter { pattern: "==-/=-==/==-/=-=", name: "مضارع مثمن اخرب محذوف" },
    Meter { pattern: "==-/=-=-/-===", name: "مضارع مسدس اخرب مکفوف" },
    Meter { pattern: "==-=/=-==/==-=/=-==", name: "مجتث مثمن سالم" },
    Meter { pattern: "-=-=/--==/-=-=/--==", name: "مجتث مثمن مخبون" },
    Meter { pattern: "-=-=/===/-=-=/--==", name: "مجتث مثمن مخبون" },
    Meter { pattern: "-=-=/--==/-=-=/===", name: "مجتث مثمن مخبون" },
    Meter { pattern: "-=-=/===/-=-=/===", name: "مجتث مثمن مخبون" },
    Meter { pattern: "-=-=/--==/-=-=/--=", name: "مجتث مثمن مخبون محذوف" },
    Meter { pattern: "-=-=/===/-=-=/--=", name: "مجتث مثمن مخبون محذوف" },
    Meter { pattern: "-=-=/--==/-=-=/==", name: "مجتث مثمن مخبون محذوف مسکن" },
    Meter { pattern: "-=-=/===/-=-=/==", name: "مجتث مثمن مخبون محذوف مسکن" },
    Meter { pattern: "-=-=/===/-=-=/==", name: "مجتث مثمن مخبون محذوف مسکن" },
    Meter { pattern: "-=-=/--==/-=-=", name: "مجتث مسدس مخبون" },
    Meter { pattern: "-=-=/===/-=-=", name: "مجتث مسدس مخبون" },
    Meter { pattern: "==-=/===-/==-=/===-", name: "منسرح مثمن سالم" },
    Meter { pattern: "=--=/=-=+=--=/=-=", name: "منسرح مثمن مطوی مکسوف" },
    Meter { pattern: "=--=/=-=-/=--=/=", name: "منسرح مثمن مطوی منحور" },
    Meter { pattern: "=--=/=-=/=--=", name: "منسرح مسدس مطوی مکسوف" },
    Meter { pattern: "===-/==-=/===-/==-=", name: "مقتضب مثمن سالم" },
    Meter { pattern: "=-=-/=--=/=-=-/=--=", name: "مقتضب مثمن مطوی" },
    Meter { pattern: "==-=/==-=/===-", name: "سریع مسدس سالم" },
    Meter { pattern: "=--=/=--=/=-=", name: "سریع مسدس مطوی مکسوف" },
    Meter { pattern: "==-=/==-=/-==", name: "سریع مسدس مخبون مکسوف" },
    Meter { pattern: "=-==/==-=/=-==/==-=", name: "خفیف مثمن سالم" },
    Meter { pattern: "=-==/==-=/=-==", name: "خفیف مسدس سالم" },
    Meter { pattern: "--==/-=-=/--==", name: "خفیف مسدس مخبون" },
    Meter { pattern: "=-==/-=-=/--=", name: "خفیف مسدس مخبون محذوف" },
    Meter { pattern: "--==/-=-=/--=", name: "خفیف مسدس مخبون محذوف" },
    Meter { pattern: "=-==/-=-=/==", name: "خفیف مسدس مخبون محذوف مقطوع" },
    Meter { pattern: "--==/-=-=/==", name: "خفیف مسدس مخبون محذوف مقطوع" },
    Meter { pattern: "=-==/-=-=/=", name: "خفیف مسدس سالم مخبون محجوف" },
    Meter { pattern: "--==/-=-=/=", name: "خفیف مسدس مخبون محجوف" },
    Meter { pattern: "-===/-==/-===", name: "طویل مثمن سالم" },
    Meter { pattern: "-==/-===/-==/-=-=", name: "طویل مثمن سالم مقبوض" },
    Meter { pattern: "-==/-=-=/-==/-=-=", name: "طویل مثمن مقبوض" },
    Meter { pattern: "=-==/=-=/=-==/=-=", name: "مدید مثمن سالم" },
    Meter { pattern: "--==/--=/--==/--=", name: "مدید مثمن مخبون" },
    Meter { pattern: "--==/==/--==/--=", name: "مدید مثمن مخبون" },
    Meter { pattern: "===/--=/--==/--=", name: "مدید مثمن مخبون" },
    Meter { pattern: "--==/--=/===/--=", name: "مدید مثمن مخبون" },
    Meter { pattern: "--==/--=/--==/==", name: "مدید مثمن مخبون" },
    Meter { pattern: "=-==/--=/=-==/--=", name: "مدید مثمن سالم مخبون" },
    Meter { pattern: "==-=/=-=/==-=/=-=", name: "بسیط مثمن سالم" },
    Meter { pattern: "-=-=/--=/-=-=/--=", name: "بسیط مثمن مخبون" },
    Meter { pattern: "-===/-===/=-==", name: "قریب مسدس سالم" },
    Meter { pattern: "==-/-==-/=-==", name: "قریب مسدس اخرب مکفوف" },
    Meter { pattern: "=-==/=-==/==-=", name: "جدید مسدس سالم" },
    Meter { pattern: "--==/--==/-=-=", name: "جدید مسدس مخبون" },
    Meter { pattern: "=-==/-===/-===", name: "مشاکل مسدس سالم" },
    Meter { pattern: "=-=-/-==-/-==", name: "مشاکل مسدس مکفوف محذوف" },
    Meter { pattern: "-=-==/-=-==/-=-==/-=-==", name: "جمیل مثمن سالم" },
    Meter { pattern: "=-=/-===", name: "ہزج مربع اشتر" },
    Meter { pattern: "=-=/-=-=", name: "ہزج مربع اشتر مقبوض" },
    Meter { pattern: "-===/-===", name: "ہزج مربع سالم" },
    Meter { pattern: "-=-=/-=-=/-=-=/-=", name: "ہزج مثمن مقبوض محذوف" },
    Meter { pattern: "=-==/--==/--==", name: "رمل مسدس مخبون" },
    Meter { pattern: "-===/-===", name: "ہزج مربع سالم" },
    Meter { pattern: "=-==/=-==", name: "رمل مربع سالم" },
    Meter { pattern: "=-==/=-=", name: "ہزج مربع محذوف" },
    Meter { pattern: "-==/-==", name: "متقارب مربع سالم" },
    Meter { pattern: "--=-=/--=-=", name: "کامل مربع سالم" },
    Meter { pattern: "-==/-===", name: "طویل مربع سالم" },
    Meter { pattern: "=-==/=-=", name: "مدید مربع سالم" },
    Meter { pattern: "-===/-===/-===/-===/-===/-===/-===/-===", name: "ہزج مثمن سالم مضاعف" },
    Meter { pattern: "-=-==/-=-==", name: "جمیل مربع سالم" },
];

pub static METERS_VARIED: [&str; NUM_VARIED_METERS] = [
    "--==/-=-=/==",
    "--==/-=-=/--=",
    "--==/--==/==",
    "--==/--==/--=",
    "--==/--==/--==/==",
    "--==/--==/--==/--=",
    "--==/--==/--==",
];

pub static METERS_VARIED_NAMES: [&str; NUM_VARIED_METERS] = [
    "خفیف مسدّس مخبون محذوف مقطوع",
    "خفیف مسدّس مخبون محذوف",
    "رمل مسدّس مخبون محذوف مقطوع",
    "رمل مسدّس مخبون محذوف",
    "رمل مثمّن مخبون محذوف مقطوع",
    "رمل مثمّن مخبون محذوف",
    "رمل مسدس مخبون",
];

pub static RUBAI_METERS: [&str; NUM_RUBAI_METERS] = [
    "==-/-==-/-==-/-=",
    "==-/-==-/-===/=",
    "==-/-=-=/-===/=",
    "==-/-=-=/-==-/-=",
    "===/=-=/-==-/-=",
    "===/=-=/-===/=",
    "==-/-===/===/=",
    "==-/-===/==-/-=",
    "===/===/==-/-=",
    "===/===/===/=",
    "===/==-/-===/=",
    "===/==-/-==-/-=",
];

pub static RUBAI_METER_NAMES: [&str; NUM_RUBAI_METERS] = [
    "ہزج مثمّن اخرب مکفوف مجبوب",
    "ہزج مثمّن اخرب مکفوف ابتر",
    "ہزج مثمّن اخرب مقبوض ابتر",
    "ہزج مثمّن اخرب مقبوض مکفوف مجبوب",
    "ہزج مثمّن اخرم اشتر مکفوف مجبوب",
    "ہزج مثمّن اخرم اشتر ابتر",
    "ہزج مثمّن اخرب اخرم ابتر",
    "ہزج مثمّن اخرب مجبوب",
    "ہزج مثمّن اخرم اخرب مجبوب",
    "ہزج مثمّن اخرم ابتر",
    "ہزج مثمّن اخرم اخرب ابتر",
    "ہزج مثمّن اخرم اخرب مکفوف مجبوب",
];

/// Special-meter patterns are documentation only — they are never matched by
/// pattern equality; `pattern_tree.rs`/`state_machine.rs` decide acceptance
/// structurally, by morae count and terminator shape.
pub static SPECIAL_METERS: [&str; NUM_SPECIAL_METERS] = [
    "=(=)/=(=)/=(=)/=(=)/=(=)/=(=)/=(=)/=",
    "=(=)/=(=)/=(=)/=(=)/=(=)/=",
    "=(=)/=(=)/=(=)/=(=)/=(=)/=(=)/=(=)/==",
    "=(=)/=(=)/=(=)/=",
    "=(=)/=(=)/=(=)/==",
    "=(=)/=(=)/=",
    "=(=)/=(=)/=(=)/=(=)/=(=)/==",
    "=(=)/=(=)",
    "(=)=/(=)=/(=)=/(=)=/(=)=/(=)=/(=)=/(=)=",
    "(=)=/(=)=/(=)=/(=)=/(=)=/(=)=",
    "(=)=/(=)=/(=)=/(=)",
];

pub static SPECIAL_METERS_AFAIL: [&str; NUM_SPECIAL_METERS] = [
    "فعلن فعلن فعلن فعلن فعلن فعلن فعلن فع",
    "فعلن فعلن فعلن فعلن فعلن فع",
    "فعلن فعلن فعلن فعلن فعلن فعلن فعلن فعلن",
    "فعلن فعلن فعلن فع",
    "فعلن فعلن فعلن فعلن",
    "فعلن فعلن فع",
    "فعلن فعلن فعلن فعلن فعلن فعلن",
    "فعلن فعلن",
    "فعلن فعلن فعلن فعلن فعلن فعلن فعلن فعلن",
    "فعلن فعلن فعلن فعلن فعلن فعلن",
    "فعلن فعلن فعلن فعلن",
];

pub static SPECIAL_METER_NAMES: [&str; NUM_SPECIAL_METERS] = [
    "بحرِ ہندی/ متقارب مثمن مضاعف",
    "بحرِ ہندی/ متقارب مسدس مضاعف",
    "بحرِ ہندی/ متقارب اثرم مقبوض محذوف مضاعف",
    "بحرِ ہندی/ متقارب مربع مضاعف",
    "بحرِ ہندی/ متقارب اثرم مقبوض محذوف",
    "بحرِ ہندی/ متقارب مثمن محذوف",
    "بحرِ ہندی/ متقارب مسدس محذوف",
    "بحرِ ہندی/ متقارب مربع محذوف",
    "بحرِ زمزمہ/ متدارک مثمن مضاعف",
    "بحرِ زمزمہ/ متدارک مسدس مضاعف",
    "بحرِ زمزمہ/ متدارک مربع مضاعف",
];

pub const NUM_FEET: usize = 32;

pub static FEET: [Foot; NUM_FEET] = [
    Foot { pattern: "===", name: "مفعولن" },
    Foot { pattern: "==-=", name: "مستفعلن" },
    Foot { pattern: "==-", name: "مفعول" },
    Foot { pattern: "==", name: "فِعْلن" },
    Foot { pattern: "=-==", name: "فاعلاتن" },
    Foot { pattern: "=-=-", name: "فاعلاتُ" },
    Foot { pattern: "=-=", name: "فاعلن" },
    Foot { pattern: "=--=", name: "مفتَعِلن" },
    Foot { pattern: "=-", name: "فِعْل" },
    Foot { pattern: "=", name: "فِع" },
    Foot { pattern: "-===", name: "مفاعیلن" },
    Foot { pattern: "-==-", name: "مفاعیل" },
    Foot { pattern: "-==", name: "فعولن" },
    Foot { pattern: "-=-=", name: "مفاعلن" },
    Foot { pattern: "-=-", name: "فعول" },
    Foot { pattern: "-=", name: "فَعَل" },
    Foot { pattern: "--==", name: "فَعِلاتن" },
    Foot { pattern: "--=-=", name: "متَفاعلن" },
    Foot { pattern: "--=-", name: "فَعِلات" },
    Foot { pattern: "--=", name: "فَعِلن" },
    Foot { pattern: "-=-==", name: "مَفاعلاتن" },
    Foot { pattern: "===-", name: "مفعولاتُ" },
    Foot { pattern: "-=--=", name: "مفاعِلَتن" },
    Foot { pattern: "==-=-", name: "مستفعلان" },
    Foot { pattern: "=-==-", name: "فاعلاتان" },
    Foot { pattern: "=--=-", name: "مفتَعِلان" },
    Foot { pattern: "-===-", name: "مفاعیلان" },
    Foot { pattern: "-=-=-", name: "مفاعلان" },
    Foot { pattern: "--==-", name: "فَعِلاتان" },
    Foot { pattern: "--=-=-", name: "متَفاعلان" },
    Foot { pattern: "-=-==-", name: "مَفاعلاتان" },
    Foot { pattern: "-=--=-", name: "مفاعِلَتان" },
];

/// The full regular-meter catalog plus lookup helpers. Built once, shared by
/// reference; no interior mutation.
pub struct Catalog {
    pub meters: &'static [Meter; NUM_METERS],
    pub meters_varied: &'static [&'static str; NUM_VARIED_METERS],
    pub meters_varied_names: &'static [&'static str; NUM_VARIED_METERS],
    pub rubai_meters: &'static [&'static str; NUM_RUBAI_METERS],
    pub rubai_meter_names: &'static [&'static str; NUM_RUBAI_METERS],
    pub special_meters_afail: &'static [&'static str; NUM_SPECIAL_METERS],
    pub special_meter_names: &'static [&'static str; NUM_SPECIAL_METERS],
    pub feet: &'static [Foot; NUM_FEET],
    pub usage: &'static [bool; NUM_METERS],
}

impl Catalog {
    /// Builds the catalog, asserting its internal integrity.
    ///
    /// These assertions are catalog-integrity failures (programmer error,
    /// not input error): a mismatch here means the tables above were edited
    /// inconsistently and the process should not start.
    pub fn new() -> Self {
        assert_eq!(METERS.len(), NUM_METERS, "meter table length mismatch");
        assert_eq!(FEET.len(), NUM_FEET, "foot table length mismatch");
        assert_eq!(USAGE.len(), NUM_METERS, "usage flag length mismatch");
        for meter in METERS.iter() {
            for part in meter.pattern.split(['+', '/']) {
                assert!(
                    Self::foot_pattern_known(part),
                    "meter {:?} has unrecognized foot fragment {:?}",
                    meter.name,
                    part
                );
            }
        }
        Catalog {
            meters: &METERS,
            meters_varied: &METERS_VARIED,
            meters_varied_names: &METERS_VARIED_NAMES,
            rubai_meters: &RUBAI_METERS,
            rubai_meter_names: &RUBAI_METER_NAMES,
            special_meters_afail: &SPECIAL_METERS_AFAIL,
            special_meter_names: &SPECIAL_METER_NAMES,
            feet: &FEET,
            usage: &USAGE,
        }
    }

    fn foot_pattern_known(pattern: &str) -> bool {
        FEET.iter().any(|f| f.pattern == pattern)
    }

    /// Foot name for a given foot pattern, or `None`. `x` is folded to `=`
    /// before lookup.
    pub fn foot_name(&self, code: &str) -> Option<&'static str> {
        let folded: String = code.chars().map(|c| if c == 'x' { '=' } else { c }).collect();
        self.feet.iter().find(|f| f.pattern == folded).map(|f| f.name)
    }

    /// Foot pattern for a given foot name, or `None`.
    pub fn foot_code(&self, name: &str) -> Option<&'static str> {
        let name = name.trim();
        self.feet.iter().find(|f| f.name == name).map(|f| f.pattern)
    }

    /// Indices (into `meters`) of every regular meter with this Urdu name.
    pub fn meter_index(&self, meter_name: &str) -> Vec<usize> {
        self.meters
            .iter()
            .enumerate()
            .filter(|(_, m)| m.name == meter_name)
            .map(|(i, _)| i)
            .collect()
    }

    /// Splits a meter pattern into its foot names, space-separated.
    pub fn afail(&self, meter_pattern: &str) -> String {
        let mut out = String::new();
        for part in meter_pattern.split('+') {
            for frag in part.split('/') {
                if let Some(name) = self.foot_name(frag) {
                    if !out.is_empty() {
                        out.push(' ');
                    }
                    out.push_str(name);
                }
            }
        }
        out
    }

    /// Ordered list of (name, code) foot pairs for a meter pattern.
    pub fn afail_list(&self, meter_pattern: &str) -> Vec<(&'static str, &'static str)> {
        let mut out = Vec::new();
        for part in meter_pattern.split('+') {
            for frag in part.split('/') {
                if let Some(f) = self.feet.iter().find(|f| f.pattern == frag) {
                    out.push((f.name, f.pattern));
                }
            }
        }
        out
    }

    /// Afail string for a special (Hindi/Zamzama) meter, by name.
    pub fn afail_hindi(&self, special_meter_name: &str) -> &'static str {
        for i in 0..NUM_SPECIAL_METERS {
            if self.special_meter_names[i] == special_meter_name {
                return self.special_meters_afail[i];
            }
        }
        ""
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_without_panicking() {
        let _catalog = Catalog::new();
    }

    #[test]
    fn afail_splits_hazaj_musamman_salim() {
        let catalog = Catalog::new();
        let feet = catalog.afail("-===/-===/-===/-===");
        assert_eq!(feet, "مفاعیلن مفاعیلن مفاعیلن مفاعیلن");
    }

    #[test]
    fn afail_handles_caesura_separator() {
        let catalog = Catalog::new();
        let feet = catalog.afail("=-=/-===+=-=/-===");
        assert_eq!(feet, "فاعلن مفاعیلن فاعلن مفاعیلن");
    }

    #[test]
    fn foot_name_folds_flexible_syllable() {
        let catalog = Catalog::new();
        assert_eq!(catalog.foot_name("==x"), catalog.foot_name("==="));
    }

    #[test]
    fn meter_index_finds_all_variants_sharing_a_name() {
        let catalog = Catalog::new();
        let indices = catalog.meter_index("ہزج مربع سالم");
        assert!(indices.len() >= 2);
    }
}
