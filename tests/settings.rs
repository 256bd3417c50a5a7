use std::io::Write;

use chrono::{TimeZone, Utc};
use pv_card::{CardError, CardSettings, PersistentVolumeList};

const PAYLOAD: &str = r#"{
    "listMeta": {"totalItems": 1},
    "persistentVolumes": [{
        "objectMeta": {"name": "pv-data", "creationTimestamp": "2024-01-02T03:04:05Z"},
        "typeMeta": {"kind": "persistentvolume"},
        "capacity": {"storage": "20Gi"},
        "accessModes": ["ReadWriteMany"],
        "reclaimPolicy": "Delete",
        "storageClass": "fast",
        "status": "Available"
    }]
}"#;

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = CardSettings::load_from(&dir.path().join("absent.yaml")).unwrap();
    assert_eq!(settings, CardSettings::default());
}

#[test]
fn directory_instead_of_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = CardSettings::load_from(dir.path()).unwrap_err();
    assert!(matches!(err, CardError::Settings { .. }));
}

#[test]
fn settings_file_drives_rendering() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"locale: de-DE
shortDatePattern: "%d.%m.%y, %H:%M"
utcOffsetMinutes: 60
hrefPrefix: "/dashboard/#!"
messages:
  MSG_PERSISTENT_VOLUME_LIST_CREATED_AT_TOOLTIP: "Erstellt am {{$creationDate}}""#
    )
    .unwrap();

    let settings = CardSettings::load_from(file.path()).unwrap();
    assert_eq!(settings.locale, "de-DE");

    let ctx = settings.context().unwrap();
    let list = PersistentVolumeList::from_json(PAYLOAD).unwrap();
    let now = Utc.with_ymd_and_hms(2024, 1, 2, 4, 4, 5).unwrap();
    let views = ctx.views(&list, now).unwrap();

    assert_eq!(views.len(), 1);
    let view = &views[0];
    assert_eq!(view.detail_href, "/dashboard/#!/persistentvolume/pv-data");
    assert_eq!(view.created_at_tooltip, "Erstellt am 02.01.24, 04:04");
    assert_eq!(view.age, "60m");
    assert_eq!(view.capacity, "20Gi");
    assert_eq!(view.access_modes, "RWX");
    assert_eq!(view.storage_class, "fast");
}

#[test]
fn view_serializes_camel_case() {
    let ctx = CardSettings::default().context().unwrap();
    let list = PersistentVolumeList::from_json(PAYLOAD).unwrap();
    let card = ctx.card(&list.persistent_volumes[0]).unwrap();
    let now = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();

    let json = serde_json::to_value(card.view(now).unwrap()).unwrap();
    assert_eq!(json["detailHref"], "#!/persistentvolume/pv-data");
    assert_eq!(json["createdAtTooltip"], "Created at 1/2/24, 3:04 AM");
    assert_eq!(json["reclaimPolicy"], "Delete");
    assert_eq!(json["age"], "0s");
}
