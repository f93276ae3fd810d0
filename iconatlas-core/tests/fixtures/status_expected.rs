// generated by iconatlas; DO NOT EDIT
// source: makeicons.xml
// atlas: 2048px, 3 icons

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u32)]
pub enum Status {
    AlertError = 0,
    Err,
    Ok,
}

static TEXCOORDS: [[f32; 2]; 3] = [
    [0.0234375, 0.046875],
    [0.0, 0.0],
    [0.5, 0.0],
];

static NAMES: [&str; 3] = [
    "AlertError",
    "Err",
    "Ok",
];

impl Status {
    pub const COUNT: usize = 3;

    pub const ALL: [Status; 3] = [
        Status::AlertError,
        Status::Err,
        Status::Ok,
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

pub fn lookup(icon: Status) -> (f32, f32) {
    icon.texcoords()
}

impl ::core::fmt::Display for Status {
    fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
        f.write_str(self.name())
    }
}

impl ::core::str::FromStr for Status {
    type Err = &'static str;

    fn from_str(s: &str) -> ::core::result::Result<Self, &'static str> {
        match NAMES.binary_search(&s) {
            ::core::result::Result::Ok(i) => ::core::result::Result::Ok(Self::ALL[i]),
            ::core::result::Result::Err(_) => ::core::result::Result::Err("unknown icon"),
        }
    }
}
