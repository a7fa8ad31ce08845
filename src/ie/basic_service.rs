//! Basic Service Information Element.

use crate::error::SfmtError;
use crate::ie::IeType;

const CALL_CLASS_SHIFT: u8 = 4;
const SERVICE_MASK: u8 = 0x0f;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CallClass {
    LiaServiceSetup = 0x2,
    Message = 0x4,
    DectIsdn = 0x7,
    Normal = 0x8,
    Internal = 0x9,
    Emergency = 0xa,
    Service = 0xb,
    ExternalHandover = 0xc,
    SupplementaryService = 0xd,
    QaM = 0xe,
    Unknown,
}

impl From<u8> for CallClass {
    fn from(v: u8) -> Self {
        match v {
            0x2 => CallClass::LiaServiceSetup,
            0x4 => CallClass::Message,
            0x7 => CallClass::DectIsdn,
            0x8 => CallClass::Normal,
            0x9 => CallClass::Internal,
            0xa => CallClass::Emergency,
            0xb => CallClass::Service,
            0xc => CallClass::ExternalHandover,
            0xd => CallClass::SupplementaryService,
            0xe => CallClass::QaM,
            _ => CallClass::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ServiceType {
    BasicSpeechDefault = 0x0,
    DectGsmIwp = 0x4,
    Lrms = 0x5,
    UmtsIwp = 0x6,
    GsmIwpSms = 0x7,
    WidebandSpeech = 0x8,
    SuotaClass4DprsManagement = 0x9,
    SuotaClass3DprsManagement = 0xa,
    Other = 0xf,
    Unknown,
}

impl From<u8> for ServiceType {
    fn from(v: u8) -> Self {
        match v {
            0x0 => ServiceType::BasicSpeechDefault,
            0x4 => ServiceType::DectGsmIwp,
            0x5 => ServiceType::Lrms,
            0x6 => ServiceType::UmtsIwp,
            0x7 => ServiceType::GsmIwpSms,
            0x8 => ServiceType::WidebandSpeech,
            0x9 => ServiceType::SuotaClass4DprsManagement,
            0xa => ServiceType::SuotaClass3DprsManagement,
            0xf => ServiceType::Other,
            _ => ServiceType::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BasicService {
    pub class: CallClass,
    pub service: ServiceType,
}

impl BasicService {
    pub fn new(class: CallClass, service: ServiceType) -> Self {
        BasicService { class, service }
    }

    pub fn marshal(&self) -> [u8; 1] {
        [((self.class as u8) << CALL_CLASS_SHIFT) | (self.service as u8)]
    }

    pub fn unmarshal(data: &[u8]) -> Result<Self, SfmtError> {
        let b = data.first().ok_or(SfmtError::InvalidIeContents {
            ie_type: IeType::BasicService,
        })?;
        Ok(BasicService {
            class: CallClass::from(b >> CALL_CLASS_SHIFT),
            service: ServiceType::from(b & SERVICE_MASK),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_service_round_trip() {
        let bs = BasicService::new(CallClass::Normal, ServiceType::BasicSpeechDefault);
        let marshaled = bs.marshal();
        assert_eq!(marshaled, [0x80]);
        assert_eq!(BasicService::unmarshal(&marshaled).unwrap(), bs);
    }

    #[test]
    fn test_basic_service_wideband() {
        let bs = BasicService::new(CallClass::Internal, ServiceType::WidebandSpeech);
        assert_eq!(bs.marshal(), [0x98]);
    }

    #[test]
    fn test_basic_service_unmarshal_empty() {
        assert!(BasicService::unmarshal(&[]).is_err());
    }
}
