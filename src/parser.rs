use crate::addr::{Address, BITS_LEN};

const OCTETS_LEN: u8 = 4;

#[derive(Debug)]
enum ParserState {
    Initial,
    Digit,
    Sep,
}

struct Parser<'a> {
    state: ParserState,
    //Number of completed octets
    components_size: u8,
    components: [u8; OCTETS_LEN as usize],
    //Value of the octet being read, never above 255 once accepted, leading zeros included
    component: u16,
    text: &'a [u8],
}

impl Parser<'_> {
    const fn extract_component(&mut self) -> Option<ParseError> {
        if self.components_size >= OCTETS_LEN {
            return Some(ParseError::InvalidComponentCount(self.components_size.saturating_add(1)));
        }

        self.components[self.components_size as usize] = self.component as u8;
        self.components_size = self.components_size.saturating_add(1);
        self.component = 0;
        None
    }

    #[inline(always)]
    const fn on_digit(&mut self, digit: u8) -> Option<ParseError> {
        match self.state {
            ParserState::Digit => {
                self.component = self.component * 10 + digit as u16;
                if self.component > u8::MAX as u16 {
                    return Some(ParseError::ComponentOverflow(self.components_size));
                }
                None
            },
            ParserState::Initial | ParserState::Sep => {
                self.state = ParserState::Digit;
                self.component = digit as u16;
                None
            },
        }
    }

    #[inline(always)]
    const fn on_sep(&mut self) -> Option<ParseError> {
        match self.state {
            ParserState::Digit => {
                self.state = ParserState::Sep;
                self.extract_component()
            },
            ParserState::Initial | ParserState::Sep => Some(ParseError::EmptyComponent(self.components_size)),
        }
    }

    //Handles last octet if any
    const fn on_ip_end(&mut self) -> Result<Address, ParseError> {
        match self.state {
            ParserState::Digit => {
                if let Some(error) = self.extract_component() {
                    return Err(error);
                }

                if self.components_size == OCTETS_LEN {
                    let [a, b, c, d] = self.components;
                    Ok(Address::new(a, b, c, d))
                } else {
                    Err(ParseError::InvalidComponentCount(self.components_size))
                }
            },
            ParserState::Sep => Err(ParseError::EmptyComponent(self.components_size)),
            ParserState::Initial => Err(ParseError::MissingAddress),
        }
    }

    //Extracts prefix after `pos`
    const fn on_prefix_sep(&self, pos: usize) -> Result<u8, ParseError> {
        let start = pos.saturating_add(1);
        if start >= self.text.len() {
            return Err(ParseError::MissingPrefix);
        }

        let mut prefix: u32 = 0;
        let mut idx = start;
        while idx < self.text.len() {
            let ch = self.text[idx];
            if ch.is_ascii_digit() {
                prefix = prefix.saturating_mul(10).saturating_add((ch - b'0') as u32);
            } else if ch.is_ascii() {
                return Err(ParseError::UnexpectedCharacter(ch as char, idx));
            } else {
                return Err(ParseError::NonAsciiCharacter(idx));
            }

            idx = idx + 1;
        }

        if prefix == 0 || prefix > BITS_LEN as u32 {
            Err(ParseError::PrefixOutOfRange(prefix))
        } else {
            Ok(prefix as u8)
        }
    }

    const fn parse(&mut self) -> Result<(Address, Option<u8>), ParseError> {
        let mut idx = 0;

        while idx < self.text.len() {
            let ch = self.text[idx];
            if ch.is_ascii_digit() {
                if let Some(error) = self.on_digit(ch - b'0') {
                    return Err(error);
                }
            } else if ch == b'.' {
                if let Some(error) = self.on_sep() {
                    return Err(error);
                }
            } else if ch == b'/' {
                let ip = match self.on_ip_end() {
                    Ok(ip) => ip,
                    Err(error) => return Err(error),
                };
                return match self.on_prefix_sep(idx) {
                    Ok(prefix) => Ok((ip, Some(prefix))),
                    Err(error) => Err(error),
                };
            } else if ch.is_ascii() {
                return Err(ParseError::UnexpectedCharacter(ch as char, idx));
            } else {
                return Err(ParseError::NonAsciiCharacter(idx));
            }

            idx = idx + 1;
        }

        match self.on_ip_end() {
            Ok(ip) => Ok((ip, None)),
            Err(error) => Err(error),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
///Possible errors parsing IPv4 address or CIDR text
pub enum ParseError {
    ///Input contains no address
    #[error("Address is not specified")]
    MissingAddress,
    ///Unexpected character with position where it is encountered at
    #[error("Encountered unexpected character '{0}' at idx={1}")]
    UnexpectedCharacter(char, usize),
    ///Unexpected Non-ASCII character encountered
    #[error("Encountered non-ASCII character at idx={0}")]
    NonAsciiCharacter(usize),
    ///Octet with provided index has no digits
    #[error("Octet {0} is empty")]
    EmptyComponent(u8),
    ///Octet with provided index is greater than 255
    #[error("Octet {0} is outside of allowed range 0..=255")]
    ComponentOverflow(u8),
    ///Address must have exactly 4 octets
    #[error("Address has '{0}' octets but expected 4")]
    InvalidComponentCount(u8),
    ///Plain address is followed by prefix
    #[error("Address must not have prefix")]
    UnexpectedPrefix,
    ///CIDR is missing `/` separator
    #[error("CIDR is missing '/' separator")]
    MissingSlash,
    ///Range is missing `-` separator
    #[error("Range is missing '-' separator")]
    MissingDash,
    ///Prefix is not specified after `/`
    #[error("Prefix is not specified")]
    MissingPrefix,
    ///Prefix is outside of `1..=32`
    #[error("Prefix '{0}' is outside of allowed range 1..=32")]
    PrefixOutOfRange(u32),
}

///Performs parsing of the string into IPv4 address with optional CIDR prefix
///
///Prefix, when present, is always within `1..=32`
pub const fn parse_ip(text: &str) -> Result<(Address, Option<u8>), ParseError> {
    let mut parser = Parser {
        state: ParserState::Initial,
        components_size: 0,
        components: [0; OCTETS_LEN as usize],
        component: 0,
        text: text.as_bytes(),
    };
    parser.parse()
}

pub(crate) const fn parse_addr(text: &str) -> Result<Address, ParseError> {
    match parse_ip(text) {
        Ok((addr, None)) => Ok(addr),
        Ok((_, Some(_))) => Err(ParseError::UnexpectedPrefix),
        Err(error) => Err(error),
    }
}

pub(crate) const fn parse_cidr(text: &str) -> Result<(Address, u8), ParseError> {
    match parse_ip(text) {
        Ok((addr, Some(prefix))) => Ok((addr, prefix)),
        Ok((_, None)) => Err(ParseError::MissingSlash),
        Err(error) => Err(error),
    }
}
