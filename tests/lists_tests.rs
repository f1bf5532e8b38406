use screener::{
    lists,
    repository::{Address, BisEntity, DeniedPerson, Sdn, SectoralSanction},
};

const SDN_CSV: &str = concat!(
    r#"173,"ANGLO-CARIBBEAN CO., LTD.",-0-,"CUBA",-0-,-0-,-0-,-0-,-0-,-0-,-0-,-0-"#,
    "\n",
    r#"2676,"AL ZAWAHIRI, Dr. Ayman","individual","SDGT","Operational Leader of JIHAD GROUP",-0-,-0-,-0-,-0-,-0-,-0-,"DOB 19 Jun 1951; POB Giza, Egypt""#,
    "\n",
);

#[test]
fn parse_sdn_file() {
    let rows = lists::parse_sdns(SDN_CSV.as_bytes()).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].entity_id, "2676");
    assert_eq!(rows[1].name, "AL ZAWAHIRI, Dr. Ayman");
    assert_eq!(rows[1].sdn_type, "individual");
}

#[test]
fn sdn_conversion_blanks_empty_markers_and_derives_the_key() {
    let rows = lists::parse_sdns(SDN_CSV.as_bytes()).unwrap();
    let sdn: Sdn = rows[1].clone().into();
    assert_eq!(sdn.call_sign.as_ref(), "");
    assert_eq!(sdn.tonnage.as_ref(), "");
    assert_eq!(sdn.name_key.as_ref(), "alzawahiridrayman");
    // reordered to natural order before normalization
    assert_eq!(sdn.match_key.as_ref(), "draymanalzawahiri");

    let corporate: Sdn = rows[0].clone().into();
    assert_eq!(corporate.sdn_type.as_ref(), "");
    assert_eq!(corporate.match_key.as_ref(), "anglocaribbeancoltd");
}

#[test]
fn parse_address_file() {
    let csv = concat!(
        r#"173,129,"Ibex House, The Minories","London EC3N 1DY","United Kingdom",-0-"#,
        "\n",
    );
    let rows = lists::parse_addresses(csv.as_bytes()).unwrap();
    assert_eq!(rows.len(), 1);

    let address: Address = rows[0].clone().into();
    assert_eq!(address.entity_id.as_ref(), "173");
    assert_eq!(address.address_id.as_ref(), "129");
    assert_eq!(address.remarks.as_ref(), "");
    assert_eq!(address.address_key.as_ref(), "ibexhousetheminories");
    assert_eq!(address.city_state_key.as_ref(), "londonec3n1dy");
    assert_eq!(address.country_key.as_ref(), "unitedkingdom");
}

#[test]
fn parse_alt_file() {
    let csv = "4691,561,\"aka\",\"TOKYO SOGO KENKYUSHO\",-0-\n";
    let rows = lists::parse_alts(csv.as_bytes()).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].entity_id, "4691");
    assert_eq!(rows[0].alternate_type, "aka");
}

#[test]
fn parse_rejects_short_rows() {
    let csv = concat!(
        r#"173,129,"Ibex House, The Minories","London EC3N 1DY","United Kingdom",-0-"#,
        "\n",
        "174,130\n",
    );
    assert!(lists::parse_addresses(csv.as_bytes()).is_err());
}

#[test]
fn parse_denied_persons_file() {
    let tsv = concat!(
        "Name\tStreet_Address\tCity\tState\tCountry\tPostal_Code\tEffective_Date\t",
        "Expiration_Date\tStandard_Order\tLast_Update\tAction\tFR_Citation\n",
        "AL NASER WINGS AIRLINES\tAL KARADA ST.\tBAGHDAD\t\tIQ\t\t06/05/2019\t",
        "06/05/2021\tY\t06/05/2019\tDENIED FOR 2 YEARS\t84 F.R. 27233 6/12/19\n",
    );
    let rows = lists::parse_denied_persons(tsv.as_bytes()).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "AL NASER WINGS AIRLINES");
    assert_eq!(rows[0].country, "IQ");

    let person: DeniedPerson = rows[0].clone().into();
    assert_eq!(person.match_key.as_ref(), "alnaserwingsairlines");
    assert_eq!(person.fr_citation.as_ref(), "84 F.R. 27233 6/12/19");
}

#[test]
fn parse_sectoral_sanctions_file() {
    let csv = concat!(
        r#"18736,"Entity","UKRAINE-EO13662","AL ZAWRAA FOR TRADING","Moscow, Russia; St. Petersburg, Russia",-0-,"ZAWRAA TRADE; AL ZAWRAA","Tax ID No. 7736050003""#,
        "\n",
    );
    let rows = lists::parse_sectoral_sanctions(csv.as_bytes()).unwrap();
    assert_eq!(rows.len(), 1);

    let sanction: SectoralSanction = rows[0].clone().into();
    assert_eq!(sanction.entity_id.as_ref(), "18736");
    assert_eq!(sanction.programs.len(), 1);
    assert_eq!(sanction.addresses.len(), 2);
    assert_eq!(sanction.addresses[1].as_ref(), "St. Petersburg, Russia");
    assert_eq!(sanction.alternate_names.len(), 2);
    assert!(sanction.remarks.is_empty());
    assert_eq!(sanction.match_key.as_ref(), "alzawraafortrading");
    assert!(!sanction.source_list_url.is_empty());
}

#[test]
fn parse_entity_list_file() {
    let tsv = concat!(
        "name\talternate_names\taddresses\tstart_date\tlicense_requirement\t",
        "license_policy\tfederal_register_notice\n",
        "Mohammad Jan Khan Mangal\tAir I Trading\tKabul, Afghanistan\t2011-10-19\t",
        "For all items subject to the EAR\tPresumption of denial\t76 FR 71867\n",
    );
    let rows = lists::parse_bis_entities(tsv.as_bytes()).unwrap();
    assert_eq!(rows.len(), 1);

    let entity: BisEntity = rows[0].clone().into();
    assert_eq!(entity.name.as_ref(), "Mohammad Jan Khan Mangal");
    assert_eq!(entity.alternate_names.len(), 1);
    assert_eq!(entity.alternate_keys[0].as_ref(), "airitrading");
    assert_eq!(entity.start_date.as_ref(), "2011-10-19");
    assert_eq!(entity.match_key.as_ref(), "mohammadjankhanmangal");
}
