// generated by iconatlas; DO NOT EDIT
// source: makeicons.xml
// atlas: 2048px, 5 icons

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u32)]
pub enum Icon {
    Action3dRotation = 0,
    ActionAccountBalance,
    AlertError,
    NavigationClose,
    ToggleStar,
}

static TEXCOORDS: [[f32; 2]; 5] = [
    [0.046875, 0.0],
    [0.0, 0.0],
    [0.0234375, 0.046875],
    [0.75, 0.9765625],
    [0.5, 0.25],
];

static NAMES: [&str; 5] = [
    "Action3dRotation",
    "ActionAccountBalance",
    "AlertError",
    "NavigationClose",
    "ToggleStar",
];

impl Icon {
    pub const COUNT: usize = 5;

    pub const ALL: [Icon; 5] = [
        Icon::Action3dRotation,
        Icon::ActionAccountBalance,
        Icon::AlertError,
        Icon::NavigationClose,
        Icon::ToggleStar,
    ];

    /// Unit coordinates of the icon's top-left corner in the atlas.
    pub fn texcoords(self) -> (f32, f32) {
        let tc = TEXCOORDS[self as usize];
        (tc[0], tc[1])
    }

    pub fn name(self) -> &'static str {
        NAMES[self as usize]
    }
}

pub fn lookup(icon: Icon) -> (f32, f32) {
    icon.texcoords()
}

impl ::core::fmt::Display for Icon {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        f.write_str(self.name())
    }
}

impl ::core::str::FromStr for Icon {
    type Err = &'static str;

    fn from_str(s: &str) -> ::core::result::Result<Self, &'static str> {
        match NAMES.binary_search(&s) {
            ::core::result::Result::Ok(i) => ::core::result::Result::Ok(Self::ALL[i]),
            ::core::result::Result::Err(_) => ::core::result::Result::Err("unknown icon"),
        }
    }
}
