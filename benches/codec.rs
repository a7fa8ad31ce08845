use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rs_dect::identity::{Ari, Ipei, Ipui};
use rs_dect::ie::basic_service::{BasicService, CallClass, ServiceType};
use rs_dect::ie::called_party_number::CalledPartyNumber;
use rs_dect::ie::calling_party_number::{NumberType, Npi};
use rs_dect::ie::fixed_identity::FixedIdentity;
use rs_dect::ie::portable_identity::PortableIdentity;
use rs_dect::ie::terminal_capability::TerminalCapability;
use rs_dect::message::cc_setup::CcSetupMsg;
use rs_dect::message::SFormatMessage;
use rs_dect::Mode;

fn bench_ie_marshal(c: &mut Criterion) {
    let mut group = c.benchmark_group("ie/marshal");

    let pi = PortableIdentity::Ipui(Ipui::N(Ipei::new(0x123, 0x456789)));
    group.bench_function("portable_identity", |b| {
        b.iter(|| black_box(&pi).marshal().unwrap())
    });

    let fi = FixedIdentity::park(Ari::ClassA {
        emc: 0x123,
        fpn: 0x4567,
    });
    group.bench_function("fixed_identity", |b| b.iter(|| black_box(&fi).marshal()));

    let tc = TerminalCapability::default();
    group.bench_function("terminal_capability", |b| b.iter(|| black_box(&tc).marshal()));

    group.finish();
}

fn bench_ie_unmarshal(c: &mut Criterion) {
    let mut group = c.benchmark_group("ie/unmarshal");

    let pi = PortableIdentity::Ipui(Ipui::N(Ipei::new(0x123, 0x456789)))
        .marshal()
        .unwrap();
    group.bench_function("portable_identity", |b| {
        b.iter(|| PortableIdentity::unmarshal(black_box(&pi)).unwrap())
    });

    let fi = FixedIdentity::park(Ari::ClassA {
        emc: 0x123,
        fpn: 0x4567,
    })
    .marshal();
    group.bench_function("fixed_identity", |b| {
        b.iter(|| FixedIdentity::unmarshal(black_box(&fi)).unwrap())
    });

    group.finish();
}

fn setup_msg() -> CcSetupMsg {
    let mut msg = CcSetupMsg::default();
    msg.portable_identity = Some(PortableIdentity::Ipui(Ipui::N(Ipei::new(0x123, 0x456789))));
    msg.fixed_identity = Some(FixedIdentity::park(Ari::ClassA {
        emc: 0x123,
        fpn: 0x4567,
    }));
    msg.basic_service = Some(BasicService::new(
        CallClass::Normal,
        ServiceType::BasicSpeechDefault,
    ));
    msg.called_party_number = Some(CalledPartyNumber::new(
        NumberType::Unknown,
        Npi::Unknown,
        *b"5551234",
    ));
    msg.terminal_capability = Some(TerminalCapability::default());
    msg
}

fn bench_message_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("message");

    let msg = setup_msg();
    group.bench_function("cc_setup/build", |b| {
        b.iter(|| black_box(&msg).build(Mode::Pp).unwrap())
    });

    let wire = msg.build(Mode::Pp).unwrap();
    group.bench_function("cc_setup/parse", |b| {
        b.iter(|| CcSetupMsg::parse(Mode::Fp, black_box(&wire)).unwrap())
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_ie_marshal,
    bench_ie_unmarshal,
    bench_message_operations
);
criterion_main!(benches);
